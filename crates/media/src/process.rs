//! Post-processing of generated clips

use async_trait::async_trait;
use motionforge_common::{MotionForgeError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Turns a generated clip into its processed variant
#[async_trait]
pub trait ClipProcessor: Send + Sync {
    /// Process `clip` and return the path of the processed file
    async fn process(&self, clip: &Path) -> Result<PathBuf>;
}

/// `clip_1.mp4` -> `clip_1_processed.mp4`
pub fn processed_file_name(clip: &Path) -> String {
    let stem = clip
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    format!("{}_processed.mp4", stem)
}

/// Copies clips into the processed directory unchanged.
///
/// Stand-in stage until branding, vertical reframing and captions exist.
#[derive(Debug, Clone)]
pub struct CopyProcessor {
    output_dir: PathBuf,
}

impl CopyProcessor {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl ClipProcessor for CopyProcessor {
    async fn process(&self, clip: &Path) -> Result<PathBuf> {
        let output = self.output_dir.join(processed_file_name(clip));

        tokio::fs::copy(clip, &output).await.map_err(|e| {
            MotionForgeError::file_system(format!(
                "Failed to copy {} to {}: {}",
                clip.display(),
                output.display(),
                e
            ))
        })?;

        debug!("processed clip copied to {}", output.display());
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processed_file_name() {
        assert_eq!(
            processed_file_name(Path::new("clips/clip_4.mp4")),
            "clip_4_processed.mp4"
        );
    }

    #[tokio::test]
    async fn test_copy_processor() {
        let tmp = tempfile::tempdir().unwrap();
        let processed_dir = tmp.path().join("processed");
        tokio::fs::create_dir_all(&processed_dir).await.unwrap();

        let clip = tmp.path().join("clip_1.mp4");
        tokio::fs::write(&clip, b"frames").await.unwrap();

        let processor = CopyProcessor::new(&processed_dir);
        let output = processor.process(&clip).await.unwrap();

        assert_eq!(output, processed_dir.join("clip_1_processed.mp4"));
        assert_eq!(tokio::fs::read(&output).await.unwrap(), b"frames");
        assert!(clip.exists());
    }

    #[tokio::test]
    async fn test_copy_processor_missing_clip() {
        let tmp = tempfile::tempdir().unwrap();
        let processor = CopyProcessor::new(tmp.path());

        let err = processor
            .process(&tmp.path().join("clip_9.mp4"))
            .await
            .unwrap_err();
        assert!(matches!(err, MotionForgeError::FileSystem(_)));
    }
}
