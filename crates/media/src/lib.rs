//! MotionForge media pipeline
//!
//! ffprobe/ffmpeg tooling, clip planning and clip post-processing

pub mod probe;
pub mod process;
pub mod split;
pub mod tool;
pub mod types;

// Re-export main types
pub use process::{processed_file_name, ClipProcessor, CopyProcessor};
pub use split::{clip_file_name, plan_clips, split_video};
pub use tool::{FfmpegTool, VideoTool};
pub use types::{ClipWindow, GeneratedClip};
