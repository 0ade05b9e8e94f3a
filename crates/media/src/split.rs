//! Cutting an upload into consecutive fixed-length clips

use motionforge_common::Result;
use std::path::Path;
use tracing::{debug, info};

use crate::tool::VideoTool;
use crate::types::{ClipWindow, GeneratedClip};

/// File name of the `index`-th clip
pub fn clip_file_name(index: usize) -> String {
    format!("clip_{}.mp4", index)
}

/// Plan consecutive clip windows over `duration` seconds.
///
/// The last window is shortened to the end of the video. At most
/// `max_clips` windows are produced; the remainder of a long video is
/// dropped.
pub fn plan_clips(duration: u64, clip_length: u64, max_clips: usize) -> Vec<ClipWindow> {
    let mut windows = Vec::new();

    if clip_length == 0 {
        return windows;
    }

    let mut start = 0;
    let mut index = 1;

    while start < duration && index <= max_clips {
        let end = (start + clip_length).min(duration);
        windows.push(ClipWindow::new(index, start, end));
        start += clip_length;
        index += 1;
    }

    windows
}

/// Probe `input` and write its clips into `output_dir`
pub async fn split_video(
    tool: &dyn VideoTool,
    input: &Path,
    output_dir: &Path,
    clip_length: u64,
    max_clips: usize,
) -> Result<Vec<GeneratedClip>> {
    let duration = tool.probe_duration(input).await?;
    let windows = plan_clips(duration, clip_length, max_clips);

    info!(
        "Splitting {} ({}s) into {} clips of {}s",
        input.display(),
        duration,
        windows.len(),
        clip_length
    );

    let mut clips = Vec::with_capacity(windows.len());

    for window in windows {
        let output = output_dir.join(clip_file_name(window.index));

        debug!(
            "generating clip {} from {}s to {}s",
            window.index, window.start, window.end
        );

        tool.extract_subclip(input, window.start, window.end, &output)
            .await?;

        clips.push(GeneratedClip {
            window,
            path: output,
        });
    }

    Ok(clips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use motionforge_common::MotionForgeError;
    use std::sync::Mutex;

    #[test]
    fn test_plan_exact_multiple() {
        let windows = plan_clips(16, 8, 10);
        assert_eq!(
            windows,
            vec![ClipWindow::new(1, 0, 8), ClipWindow::new(2, 8, 16)]
        );
    }

    #[test]
    fn test_plan_short_tail() {
        let windows = plan_clips(20, 8, 10);
        assert_eq!(windows.len(), 3);
        assert_eq!(windows[2], ClipWindow::new(3, 16, 20));
    }

    #[test]
    fn test_plan_shorter_than_clip() {
        assert_eq!(plan_clips(5, 8, 10), vec![ClipWindow::new(1, 0, 5)]);
    }

    #[test]
    fn test_plan_caps_clip_count() {
        let windows = plan_clips(600, 8, 10);
        assert_eq!(windows.len(), 10);
        assert_eq!(windows.last().copied(), Some(ClipWindow::new(10, 72, 80)));
    }

    #[test]
    fn test_plan_degenerate_inputs() {
        assert!(plan_clips(0, 8, 10).is_empty());
        assert!(plan_clips(30, 0, 10).is_empty());
        assert!(plan_clips(30, 8, 0).is_empty());
    }

    #[test]
    fn test_clip_file_name() {
        assert_eq!(clip_file_name(1), "clip_1.mp4");
        assert_eq!(clip_file_name(12), "clip_12.mp4");
    }

    struct FakeTool {
        duration: u64,
        fail_probe: bool,
        cuts: Mutex<Vec<(u64, u64)>>,
    }

    #[async_trait]
    impl VideoTool for FakeTool {
        async fn probe_duration(&self, _input: &Path) -> Result<u64> {
            if self.fail_probe {
                return Err(MotionForgeError::media("ffprobe failed: moov atom not found"));
            }
            Ok(self.duration)
        }

        async fn extract_subclip(
            &self,
            _input: &Path,
            start: u64,
            end: u64,
            output: &Path,
        ) -> Result<()> {
            self.cuts.lock().unwrap().push((start, end));
            tokio::fs::write(output, b"clip").await?;
            Ok(())
        }

        async fn check_available(&self) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_split_video_writes_clips_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        let tool = FakeTool {
            duration: 19,
            fail_probe: false,
            cuts: Mutex::new(Vec::new()),
        };

        let clips = split_video(&tool, Path::new("in.mp4"), tmp.path(), 8, 10)
            .await
            .unwrap();

        assert_eq!(clips.len(), 3);
        assert_eq!(clips[0].path, tmp.path().join("clip_1.mp4"));
        assert_eq!(clips[2].file_name(), "clip_3.mp4");
        assert!(clips.iter().all(|c| c.path.exists()));
        assert_eq!(*tool.cuts.lock().unwrap(), vec![(0, 8), (8, 16), (16, 19)]);
    }

    #[tokio::test]
    async fn test_split_video_propagates_probe_error() {
        let tmp = tempfile::tempdir().unwrap();
        let tool = FakeTool {
            duration: 0,
            fail_probe: true,
            cuts: Mutex::new(Vec::new()),
        };

        let err = split_video(&tool, Path::new("in.mp4"), tmp.path(), 8, 10)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("ffprobe failed"));
        assert!(tool.cuts.lock().unwrap().is_empty());
    }
}
