use crate::error::MotionForgeError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default clip length in seconds
pub const DEFAULT_CLIP_LENGTH: u32 = 8;

/// Shortest clip length accepted by the upload endpoint
pub const MIN_CLIP_LENGTH: u32 = 3;

/// Longest clip length accepted by the upload endpoint
pub const MAX_CLIP_LENGTH: u32 = 60;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_UPLOAD_BYTES: u64 = 300 * 1024 * 1024;
const DEFAULT_MAX_CLIPS: usize = 10;

/// MotionForge application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Directory where uploaded videos are stored
    pub upload_dir: PathBuf,

    /// Directory where generated clips are written and served from
    pub clips_dir: PathBuf,

    /// Directory for processed clip variants
    pub processed_dir: PathBuf,

    /// Upload history file
    pub history_path: PathBuf,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,

    /// ffmpeg binary
    pub ffmpeg_path: String,

    /// ffprobe binary
    pub ffprobe_path: String,

    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: u64,

    /// Maximum number of clips generated per upload
    pub max_clips: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, MotionForgeError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self::from_lookup(|key| std::env::var(key).ok());

        // Ensure required directories exist
        config.ensure_directories()?;

        Ok(config)
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Missing or unparsable values fall back to their defaults. Does not
    /// touch the filesystem.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);
        let parsed = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());

        let upload_dir = path("UPLOAD_DIR").unwrap_or_else(|| PathBuf::from("./uploads"));
        let clips_dir = path("CLIPS_DIR").unwrap_or_else(|| PathBuf::from("./clips"));
        let processed_dir = path("PROCESSED_DIR").unwrap_or_else(|| clips_dir.join("processed"));
        let history_path =
            path("HISTORY_PATH").unwrap_or_else(|| upload_dir.join("upload_history.json"));

        Self {
            server_host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: lookup("PORT")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            upload_dir,
            clips_dir,
            processed_dir,
            history_path,
            log_dir: path("LOG_DIR").unwrap_or_else(|| PathBuf::from("./logs")),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            ffmpeg_path: lookup("FFMPEG_PATH").unwrap_or_else(|| "ffmpeg".to_string()),
            ffprobe_path: lookup("FFPROBE_PATH").unwrap_or_else(|| "ffprobe".to_string()),
            max_upload_bytes: parsed("MAX_UPLOAD_BYTES").unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            max_clips: parsed("MAX_CLIPS")
                .map(|n| n as usize)
                .unwrap_or(DEFAULT_MAX_CLIPS),
        }
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), MotionForgeError> {
        let dirs = [
            &self.upload_dir,
            &self.clips_dir,
            &self.processed_dir,
            &self.log_dir,
        ];

        for dir in dirs {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    MotionForgeError::config(format!(
                        "Failed to create directory {}: {}",
                        dir.display(),
                        e
                    ))
                })?;
            }
        }

        Ok(())
    }

    /// Get full path for uploaded file
    pub fn get_upload_path(&self, filename: &str) -> PathBuf {
        self.upload_dir.join(filename)
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), MotionForgeError> {
        if self.server_port == 0 {
            return Err(MotionForgeError::config("Server port cannot be 0"));
        }

        if self.max_clips == 0 {
            return Err(MotionForgeError::config("MAX_CLIPS must be at least 1"));
        }

        if self.max_upload_bytes == 0 {
            return Err(MotionForgeError::config("MAX_UPLOAD_BYTES must be at least 1"));
        }

        if self.ffmpeg_path.is_empty() || self.ffprobe_path.is_empty() {
            return Err(MotionForgeError::config(
                "ffmpeg and ffprobe paths cannot be empty",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.max_clips, 10);
        assert_eq!(config.max_upload_bytes, 300 * 1024 * 1024);
        assert_eq!(config.processed_dir, PathBuf::from("./clips/processed"));
    }

    #[test]
    fn test_server_bind_address_without_port() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.server_bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_port_from_env() {
        let config = AppConfig::from_lookup(lookup_from(&[("PORT", "9090")]));
        assert_eq!(config.server_bind_address(), "0.0.0.0:9090");
    }

    #[test]
    fn test_unparsable_port_falls_back() {
        let config = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")]));
        assert_eq!(config.server_port, 8000);
    }

    #[test]
    fn test_processed_dir_follows_clips_dir() {
        let config = AppConfig::from_lookup(lookup_from(&[("CLIPS_DIR", "/srv/clips")]));
        assert_eq!(config.processed_dir, PathBuf::from("/srv/clips/processed"));
    }

    #[test]
    fn test_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());

        let mut invalid_config = AppConfig::default();
        invalid_config.max_clips = 0;
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = AppConfig::default();
        invalid_config.ffprobe_path = String::new();
        assert!(invalid_config.validate().is_err());
    }

    #[test]
    fn test_ensure_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().to_string_lossy().to_string();
        let config = AppConfig::from_lookup(lookup_from(&[
            ("UPLOAD_DIR", &format!("{}/uploads", root)),
            ("CLIPS_DIR", &format!("{}/clips", root)),
            ("LOG_DIR", &format!("{}/logs", root)),
        ]));

        config.ensure_directories().unwrap();
        assert!(tmp.path().join("uploads").is_dir());
        assert!(tmp.path().join("clips/processed").is_dir());
        assert!(tmp.path().join("logs").is_dir());

        // Idempotent
        config.ensure_directories().unwrap();
    }
}
