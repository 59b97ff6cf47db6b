use crate::traits::KeyValueStore;
use kanban_core::KanbanResult;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// In-process key-value store
/// Clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value without going through the async API
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.entries.lock().insert(key.into(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().contains_key(key)
    }

    pub fn snapshot(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.lock().get(key).cloned()
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> KanbanResult<Option<Vec<u8>>> {
        Ok(self.snapshot(key))
    }

    async fn set(&self, key: &str, value: &[u8]) -> KanbanResult<()> {
        self.entries.lock().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn remove(&self, key: &str) -> KanbanResult<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}
