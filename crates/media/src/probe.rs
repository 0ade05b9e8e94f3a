//! Duration probing helpers

use motionforge_common::{MotionForgeError, Result};
use std::path::Path;

/// Arguments passed to ffprobe to print only the container duration
pub fn ffprobe_args(input: &Path) -> Vec<String> {
    vec![
        "-v".to_string(),
        "error".to_string(),
        "-show_entries".to_string(),
        "format=duration".to_string(),
        "-of".to_string(),
        "default=noprint_wrappers=1:nokey=1".to_string(),
        input.to_string_lossy().to_string(),
    ]
}

/// Parse ffprobe output into whole seconds (truncated)
pub fn parse_duration(stdout: &str) -> Result<u64> {
    let trimmed = stdout.trim();

    let seconds: f64 = trimmed
        .parse()
        .map_err(|_| MotionForgeError::media(format!("Cannot parse duration: {:?}", trimmed)))?;

    if !seconds.is_finite() || seconds < 0.0 {
        return Err(MotionForgeError::media(format!(
            "Cannot parse duration: {:?}",
            trimmed
        )));
    }

    Ok(seconds.trunc() as u64)
}
