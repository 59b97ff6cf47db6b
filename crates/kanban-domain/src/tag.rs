use kanban_core::{KanbanError, KanbanResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::codec::lenient;

pub type TagId = Uuid;

/// Glyph used by the remove button on registry chips; never part of a name.
pub const REMOVE_GLYPH: char = '×';

pub fn strip_remove_glyph(name: &str) -> String {
    name.replace(REMOVE_GLYPH, "")
}

/// A tag as carried by a card: a copy of a registry entry's name and color.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TagCopy {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub color: String,
}

impl TagCopy {
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            name: strip_remove_glyph(name),
            color: color.to_string(),
        }
    }
}

/// An entry in the board's tag registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub color: String,
}

impl Tag {
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: strip_remove_glyph(name),
            color: color.to_string(),
        }
    }

    pub fn to_copy(&self) -> TagCopy {
        TagCopy {
            name: self.name.clone(),
            color: self.color.clone(),
        }
    }
}

/// Globally available tags, independent of which cards use them.
///
/// Names are not deduplicated: registering the same name twice yields two
/// entries that can be applied and removed independently.
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    tags: Vec<Tag>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, color: &str) -> KanbanResult<TagId> {
        let name = strip_remove_glyph(name.trim());
        let name = name.trim();
        let color = color.trim();
        if name.is_empty() || color.is_empty() {
            return Err(KanbanError::Validation(
                "Please enter a tag name and select a color.".to_string(),
            ));
        }
        let tag = Tag::new(name, color);
        let id = tag.id;
        self.tags.push(tag);
        Ok(id)
    }

    /// Appends an entry as-is, apart from glyph stripping. Used when
    /// rebuilding a registry from a stored document.
    pub fn push(&mut self, tag: Tag) {
        self.tags.push(Tag {
            name: strip_remove_glyph(&tag.name),
            ..tag
        });
    }

    pub fn remove(&mut self, id: TagId) -> KanbanResult<Tag> {
        let index = self
            .tags
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| KanbanError::MissingTarget(format!("tag {}", id)))?;
        Ok(self.tags.remove(index))
    }

    pub fn get(&self, id: TagId) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    pub fn as_slice(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }
}
