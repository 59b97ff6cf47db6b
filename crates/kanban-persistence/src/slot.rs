//! The single persisted board slot.

use crate::serialization::JsonSerializer;
use crate::traits::{KeyValueStore, Serializer};
use kanban_core::KanbanResult;
use kanban_domain::codec::BoardDocument;
use std::sync::Arc;

/// One named entry in a [`KeyValueStore`] holding the encoded board
#[derive(Clone)]
pub struct DocumentSlot {
    store: Arc<dyn KeyValueStore>,
    key: String,
    serializer: JsonSerializer,
}

impl DocumentSlot {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            serializer: JsonSerializer::compact(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw bytes currently stored, if any
    pub async fn read_raw(&self) -> KanbanResult<Option<Vec<u8>>> {
        self.store.get(&self.key).await
    }

    /// Load and parse the stored document
    /// `Ok(None)` means the slot is empty; unreadable content is `MalformedDocument`
    pub async fn load(&self) -> KanbanResult<Option<BoardDocument>> {
        match self.read_raw().await? {
            Some(bytes) => {
                let document: BoardDocument = self.serializer.deserialize(&bytes)?;
                tracing::debug!(
                    "Loaded board document from slot '{}' ({} lists)",
                    self.key,
                    document.lists.len()
                );
                Ok(Some(document))
            }
            None => Ok(None),
        }
    }

    /// Overwrite the slot with `document`
    pub async fn save(&self, document: &BoardDocument) -> KanbanResult<()> {
        let bytes = self.serializer.serialize(document)?;
        self.store.set(&self.key, &bytes).await?;
        tracing::debug!("Saved board document to slot '{}'", self.key);
        Ok(())
    }

    pub async fn clear(&self) -> KanbanResult<()> {
        self.store.remove(&self.key).await?;
        tracing::debug!("Cleared slot '{}'", self.key);
        Ok(())
    }
}

impl std::fmt::Debug for DocumentSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentSlot")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
