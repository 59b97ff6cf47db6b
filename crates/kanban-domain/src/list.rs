use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::card::{Card, CardId};

/// Opaque list identifier. Assigned once and carried unchanged through
/// save, export and import.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(String);

impl ListId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(format!("list-{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ListId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub id: ListId,
    pub title: String,
    pub cards: Vec<Card>,
}

impl List {
    pub fn new(id: ListId, title: String) -> Self {
        Self {
            id,
            title,
            cards: Vec::new(),
        }
    }

    pub fn rename(&mut self, title: String) {
        self.title = title;
    }

    pub fn position_of(&self, card_id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = ListId::generate();
        let b = ListId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("list-"));
    }

    #[test]
    fn test_list_id_serializes_as_plain_string() {
        let id = ListId::from("L1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"L1\"");
    }

    #[test]
    fn test_position_of() {
        let mut list = List::new("todo".into(), "To Do".to_string());
        let card = Card::new("a".to_string(), None);
        let id = card.id;
        list.cards.push(Card::new("b".to_string(), None));
        list.cards.push(card);
        assert_eq!(list.position_of(id), Some(1));
    }
}
