use async_trait::async_trait;
use motionforge_common::{AppConfig, MotionForgeError, Result};
use std::path::Path;
use std::process::Output;
use tokio::process::Command;
use tracing::{debug, info};

use crate::probe::{ffprobe_args, parse_duration};

/// External media tooling used to probe and cut videos
#[async_trait]
pub trait VideoTool: Send + Sync {
    /// Duration of the input in whole seconds
    async fn probe_duration(&self, input: &Path) -> Result<u64>;

    /// Write `[start, end)` of `input` to `output`
    async fn extract_subclip(&self, input: &Path, start: u64, end: u64, output: &Path)
        -> Result<()>;

    /// Test that the tooling can be executed
    async fn check_available(&self) -> Result<()>;
}

/// `VideoTool` backed by the ffmpeg / ffprobe command line binaries
#[derive(Debug, Clone)]
pub struct FfmpegTool {
    ffmpeg_path: String,
    ffprobe_path: String,
}

impl FfmpegTool {
    pub fn new(ffmpeg_path: impl Into<String>, ffprobe_path: impl Into<String>) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
            ffprobe_path: ffprobe_path.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.ffmpeg_path, &config.ffprobe_path)
    }

    /// ffmpeg arguments for a stream-copy cut
    pub fn subclip_args(input: &Path, start: u64, end: u64, output: &Path) -> Vec<String> {
        vec![
            "-y".to_string(),
            "-ss".to_string(),
            start.to_string(),
            "-i".to_string(),
            input.to_string_lossy().to_string(),
            "-t".to_string(),
            end.saturating_sub(start).to_string(),
            "-map".to_string(),
            "0".to_string(),
            "-vcodec".to_string(),
            "copy".to_string(),
            "-acodec".to_string(),
            "copy".to_string(),
            output.to_string_lossy().to_string(),
        ]
    }

    async fn run(program: &str, args: &[String]) -> Result<Output> {
        debug!("Running {} {}", program, args.join(" "));

        Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| MotionForgeError::media(format!("Failed to run {}: {}", program, e)))
    }
}

#[async_trait]
impl VideoTool for FfmpegTool {
    async fn probe_duration(&self, input: &Path) -> Result<u64> {
        let output = Self::run(&self.ffprobe_path, &ffprobe_args(input)).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MotionForgeError::media(format!("ffprobe failed: {}", stderr.trim())));
        }

        parse_duration(&String::from_utf8_lossy(&output.stdout))
    }

    async fn extract_subclip(
        &self,
        input: &Path,
        start: u64,
        end: u64,
        output: &Path,
    ) -> Result<()> {
        let args = Self::subclip_args(input, start, end, output);
        let result = Self::run(&self.ffmpeg_path, &args).await?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(MotionForgeError::media(format!("ffmpeg failed: {}", stderr.trim())));
        }

        Ok(())
    }

    async fn check_available(&self) -> Result<()> {
        for program in [&self.ffmpeg_path, &self.ffprobe_path] {
            let output = Self::run(program, &["-version".to_string()]).await?;
            if !output.status.success() {
                return Err(MotionForgeError::media(format!(
                    "{} -version exited with {}",
                    program, output.status
                )));
            }
        }

        info!("Media tooling available: {}, {}", self.ffmpeg_path, self.ffprobe_path);
        Ok(())
    }
}
