pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::{AppConfig, DEFAULT_CLIP_LENGTH, MAX_CLIP_LENGTH, MIN_CLIP_LENGTH};
pub use error::MotionForgeError;
pub type Result<T> = std::result::Result<T, MotionForgeError>;
