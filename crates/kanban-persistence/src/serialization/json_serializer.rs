use crate::traits::Serializer;
use kanban_core::{KanbanError, KanbanResult};

/// JSON serializer for board documents
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    /// Single-line output, used for the persisted slot
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Indented output, used for export files
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for JsonSerializer
{
    fn serialize(&self, data: &T) -> KanbanResult<Vec<u8>> {
        let json = if self.pretty {
            serde_json::to_vec_pretty(data)
        } else {
            serde_json::to_vec(data)
        };
        json.map_err(|e| KanbanError::Serialization(e.to_string()))
    }

    /// Only a JSON object is accepted at the root
    fn deserialize(&self, bytes: &[u8]) -> KanbanResult<T> {
        let value: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| KanbanError::MalformedDocument(e.to_string()))?;
        if !value.is_object() {
            return Err(KanbanError::MalformedDocument(
                "expected a JSON object at the document root".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| KanbanError::MalformedDocument(e.to_string()))
    }
}
