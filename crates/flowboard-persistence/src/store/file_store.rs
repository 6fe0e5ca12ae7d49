use async_trait::async_trait;
use flowboard_core::{AppConfig, FlowboardError, FlowboardResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::traits::KeyValueStore;

/// File-backed key-value store: one file per key under a data directory.
///
/// Writes go to a temp file in the same directory followed by an atomic
/// rename, so a crash mid-write never leaves a corrupt value behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Store rooted at the configured data directory.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.effective_data_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    async fn write_atomic(&self, path: &Path, data: &[u8]) -> FlowboardResult<()> {
        let temp = tempfile::NamedTempFile::new_in(&self.dir)
            .map_err(|e| FlowboardError::StorageWrite(e.to_string()))?;
        let temp_path = temp.into_temp_path();

        fs::write(&temp_path, data)
            .await
            .map_err(|e| FlowboardError::StorageWrite(e.to_string()))?;
        // Atomic on POSIX; readers see either the old value or the new one.
        fs::rename(&temp_path, path)
            .await
            .map_err(|e| FlowboardError::StorageWrite(e.to_string()))?;

        tracing::debug!("wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> FlowboardResult<Option<String>> {
        match fs::read_to_string(self.key_path(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FlowboardError::StorageRead(e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> FlowboardResult<()> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| FlowboardError::StorageWrite(e.to_string()))?;
        self.write_atomic(&self.key_path(key), value.as_bytes())
            .await
    }
}
