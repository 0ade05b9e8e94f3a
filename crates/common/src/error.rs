/// MotionForge error types
#[derive(Debug, thiserror::Error)]
pub enum MotionForgeError {
    /// ffmpeg / ffprobe related error
    #[error("Media error: {0}")]
    Media(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system error
    #[error("File system error: {0}")]
    FileSystem(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Upload exceeded the configured size limit
    #[error("{0}")]
    PayloadTooLarge(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionForgeError {
    /// Create media error
    pub fn media<S: Into<String>>(msg: S) -> Self {
        Self::Media(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create file system error
    pub fn file_system<S: Into<String>>(msg: S) -> Self {
        Self::FileSystem(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create payload too large error
    pub fn payload_too_large<S: Into<String>>(msg: S) -> Self {
        Self::PayloadTooLarge(msg.into())
    }
}

// HTTP response conversion (used by the server crate)
impl MotionForgeError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 422,
            Self::PayloadTooLarge(_) => 400,
            Self::Json(_) => 400,
            Self::Media(_) => 500,
            Self::Config(_) => 500,
            Self::FileSystem(_) => 500,
            Self::Io(_) => 500,
            Self::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(MotionForgeError::invalid_input("x").status_code(), 422);
        assert_eq!(MotionForgeError::payload_too_large("x").status_code(), 400);
        assert_eq!(MotionForgeError::media("x").status_code(), 500);
    }

    #[test]
    fn test_payload_too_large_message_is_bare() {
        let err = MotionForgeError::payload_too_large("File is too large for the server.");
        assert_eq!(err.to_string(), "File is too large for the server.");
    }
}
