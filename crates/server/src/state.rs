use motionforge_common::{AppConfig, Result};
use motionforge_media::{ClipProcessor, CopyProcessor, FfmpegTool, VideoTool};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::history::HistoryManager;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Probing and cutting
    pub tool: Arc<dyn VideoTool>,

    /// Post-processing stage applied to every clip
    pub processor: Arc<dyn ClipProcessor>,

    /// Upload history
    pub history: RwLock<HistoryManager>,

    /// Held while clips are generated; clip file names are shared by all uploads
    pub split_lock: Mutex<()>,
}

impl AppState {
    /// Create state backed by ffmpeg and the copy processor
    pub fn new(config: AppConfig) -> Result<Self> {
        let tool = Arc::new(FfmpegTool::from_config(&config));
        let processor = Arc::new(CopyProcessor::new(&config.processed_dir));
        Self::with_tools(config, tool, processor)
    }

    /// Create state with explicit media tooling
    pub fn with_tools(
        config: AppConfig,
        tool: Arc<dyn VideoTool>,
        processor: Arc<dyn ClipProcessor>,
    ) -> Result<Self> {
        let history = HistoryManager::load(&config.history_path)?;

        Ok(Self {
            config,
            tool,
            processor,
            history: RwLock::new(history),
            split_lock: Mutex::new(()),
        })
    }
}
