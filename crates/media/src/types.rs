use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Time window of a single clip, in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipWindow {
    /// 1-based clip number
    pub index: usize,

    /// Start offset in seconds
    pub start: u64,

    /// End offset in seconds (exclusive)
    pub end: u64,
}

impl ClipWindow {
    pub fn new(index: usize, start: u64, end: u64) -> Self {
        Self { index, start, end }
    }
}

/// A clip written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedClip {
    pub window: ClipWindow,
    pub path: PathBuf,
}

impl GeneratedClip {
    /// File name of the clip (e.g. `clip_1.mp4`)
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}
