use crate::types::HistoryRecord;
use motionforge_common::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub struct HistoryManager {
    records: Vec<HistoryRecord>,
    file_path: PathBuf,
}

impl HistoryManager {
    pub fn load(path: &Path) -> Result<Self> {
        let records: Vec<HistoryRecord> = if path.exists() {
            let data = fs::read_to_string(path)?;
            serde_json::from_str(&data).unwrap_or_else(|e| {
                warn!("Ignoring unreadable history {}: {}", path.display(), e);
                Vec::new()
            })
        } else {
            Vec::new()
        };

        Ok(Self {
            records,
            file_path: path.to_path_buf(),
        })
    }

    pub fn add_record(&mut self, record: HistoryRecord) -> Result<()> {
        self.records.push(record);
        self.save()
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.file_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: &str) -> HistoryRecord {
        HistoryRecord {
            id: id.to_string(),
            filename: "holiday.mp4".to_string(),
            saved_to: "uploads/holiday.mp4".to_string(),
            clip_length: 8,
            num_clips: 2,
            clip_urls: vec!["/clips/clip_1.mp4".to_string(), "/clips/clip_2.mp4".to_string()],
            processed_clip_urls: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_add_and_reload() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("history.json");

        let mut history = HistoryManager::load(&path).unwrap();
        assert!(history.records().is_empty());

        history.add_record(record("a")).unwrap();
        history.add_record(record("b")).unwrap();

        let reloaded = HistoryManager::load(&path).unwrap();
        assert_eq!(reloaded.records().len(), 2);
        assert_eq!(reloaded.records()[1].id, "b");
        assert_eq!(reloaded.records()[0].id, "a");
        assert_eq!(reloaded.records()[0].num_clips, 2);
    }

    #[test]
    fn test_corrupt_history_loads_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("history.json");
        fs::write(&path, "{not json").unwrap();

        let history = HistoryManager::load(&path).unwrap();
        assert!(history.records().is_empty());
    }
}
