//! Board decoding and import helpers.

use super::models::{BoardDocument, CardDocument, ListDocument};
use crate::{Board, Card, List, ListId, Tag};
use kanban_core::{KanbanError, KanbanResult};
use serde::Deserialize;
use serde_json::Value;

pub struct BoardImporter;

impl BoardImporter {
    /// Parses document text. Fails only when the text is not a JSON object.
    pub fn parse(json: &str) -> KanbanResult<BoardDocument> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| KanbanError::MalformedDocument(e.to_string()))?;
        Self::from_value(value)
    }

    fn from_value(value: Value) -> KanbanResult<BoardDocument> {
        if !value.is_object() {
            return Err(KanbanError::MalformedDocument(
                "expected a JSON object at the document root".to_string(),
            ));
        }
        BoardDocument::deserialize(value).map_err(|e| KanbanError::MalformedDocument(e.to_string()))
    }

    /// Rebuilds a board. `fallback_title` is used when the document has no
    /// `boardTitle`.
    pub fn decode(document: BoardDocument, fallback_title: &str) -> Board {
        let title = document
            .board_title
            .unwrap_or_else(|| fallback_title.to_string());
        let mut board = Board::new(title);

        for tag in document.tags {
            board.tags.push(Tag::new(&tag.name, &tag.color));
        }
        board.lists = document.lists.into_iter().map(Self::decode_list).collect();
        board
    }

    fn decode_list(document: ListDocument) -> List {
        let id = document
            .id
            .filter(|id| !id.is_empty())
            .map(ListId::new)
            .unwrap_or_else(ListId::generate);
        let mut list = List::new(id, document.title);
        list.cards = document.cards.into_iter().map(Self::decode_card).collect();
        list
    }

    fn decode_card(document: CardDocument) -> Card {
        let mut card = Card::new(document.text, Some(document.description));
        for tag in document.tags {
            card.apply_tag(crate::TagCopy::new(&tag.name, &tag.color));
        }
        card.checklist = document.checklist;
        card
    }

    pub fn import_from_json(json: &str, fallback_title: &str) -> KanbanResult<Board> {
        Ok(Self::decode(Self::parse(json)?, fallback_title))
    }
}
