//! Snapshot as a single JSON document.
//!
//! Writes go to a sibling `.tmp` file that is then renamed over the target,
//! so a reader sees either the old snapshot or the new one.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use claimguard_core::errors::StorageError;
use claimguard_core::models::CoordinatorSnapshot;
use claimguard_core::traits::IStateStore;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_err(&self, e: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        }
    }
}

impl IStateStore for JsonFileStore {
    fn load(&self) -> Result<Option<CoordinatorSnapshot>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_err(e)),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| StorageError::CorruptSnapshot {
                details: format!("{}: {e}", self.path.display()),
            })
    }

    fn save(&self, snapshot: &CoordinatorSnapshot) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(snapshot).map_err(|e| {
            StorageError::Serialization {
                reason: e.to_string(),
            }
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }
        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(|e| self.io_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))?;
        debug!(path = %self.path.display(), "snapshot written");
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_cold_start() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn garbage_is_reported_as_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();
        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::CorruptSnapshot { .. }));
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, r#"{"training_rounds": 4}"#).unwrap();
        let snapshot = JsonFileStore::new(&path).load().unwrap().unwrap();
        assert_eq!(snapshot.training_rounds, 4);
        assert_eq!(snapshot.global_model_accuracy, 0.75);
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("state.json"));
        store.save(&CoordinatorSnapshot::default()).unwrap();
        assert!(store.path().exists());
        assert!(!store.temp_path().exists());
    }
}
