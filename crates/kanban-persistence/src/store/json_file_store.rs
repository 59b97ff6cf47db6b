use crate::store::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStore;
use kanban_core::{KanbanError, KanbanResult};
use std::path::{Path, PathBuf};

/// JSON file-based key-value store
/// Each key maps to `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a new store rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> KanbanResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(KanbanError::Validation(format!(
                "Invalid storage key: {:?}",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> KanbanResult<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            tracing::debug!("No stored value at {}", path.display());
            return Ok(None);
        }

        let bytes = AtomicWriter::read_all(&path).await?;
        tracing::info!("Loaded {} bytes from {}", bytes.len(), path.display());
        Ok(Some(bytes))
    }

    async fn set(&self, key: &str, value: &[u8]) -> KanbanResult<()> {
        let path = self.path_for(key)?;
        AtomicWriter::write_atomic(&path, value).await?;

        tracing::info!("Saved {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> KanbanResult<()> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!("Removed {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
