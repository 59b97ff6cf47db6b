use async_trait::async_trait;
use kanban_core::KanbanResult;

/// Trait for abstract key-value blob storage
/// Implementations hold whole values; writes always overwrite
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, or `None` if nothing was written
    async fn get(&self, key: &str) -> KanbanResult<Option<Vec<u8>>>;

    /// Replace the value under `key`
    async fn set(&self, key: &str, value: &[u8]) -> KanbanResult<()>;

    /// Delete the value under `key`; deleting an absent key is not an error
    async fn remove(&self, key: &str) -> KanbanResult<()>;
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T: Send + Sync>: Send + Sync {
    /// Serialize data to bytes
    fn serialize(&self, data: &T) -> KanbanResult<Vec<u8>>;

    /// Deserialize data from bytes
    fn deserialize(&self, bytes: &[u8]) -> KanbanResult<T>;
}
