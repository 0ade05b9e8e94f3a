use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upload history record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Unique identifier
    pub id: String,

    /// Original filename as sent by the browser
    pub filename: String,

    /// Where the upload was stored
    pub saved_to: String,

    /// Requested clip length in seconds
    pub clip_length: u32,

    /// Number of clips generated
    pub num_clips: usize,

    #[serde(default)]
    pub clip_urls: Vec<String>,

    #[serde(default)]
    pub processed_clip_urls: Vec<String>,

    /// Upload timestamp
    pub timestamp: DateTime<Utc>,
}

impl HistoryRecord {
    /// Create a history record from a finished upload
    pub fn from_response(id: String, response: &UploadResponse) -> Self {
        Self {
            id,
            filename: response.filename.clone(),
            saved_to: response.saved_to.clone(),
            clip_length: response.clip_length,
            num_clips: response.num_clips,
            clip_urls: response.clip_urls.clone(),
            processed_clip_urls: response.processed_clip_urls.clone(),
            timestamp: Utc::now(),
        }
    }
}

/// Query string of `POST /upload`
#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    /// Clip length in seconds, kept raw so that bad values map to 422
    pub clip_length: Option<String>,
}

/// Upload response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,

    /// Original filename
    pub filename: String,

    /// Stored upload path
    pub saved_to: String,

    pub clip_length: u32,

    pub num_clips: usize,

    /// Clip paths on disk
    pub clips: Vec<String>,

    /// Processed clip paths on disk
    pub processed_clips: Vec<String>,

    /// Public URLs of the clips
    pub clip_urls: Vec<String>,

    /// Public URLs of the processed clips
    pub processed_clip_urls: Vec<String>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error body, `{"detail": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
