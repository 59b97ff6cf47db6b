//! Board encoding and export helpers.

use super::models::{BoardDocument, CardDocument, ListDocument};
use crate::{Board, Card, List};

/// Title used for the export file name when the board has none.
pub const FALLBACK_EXPORT_TITLE: &str = "trello-board";

pub struct BoardExporter;

impl BoardExporter {
    pub fn encode(board: &Board) -> BoardDocument {
        BoardDocument {
            board_title: Some(board.title.clone()),
            tags: board.tags.iter().map(|t| t.to_copy()).collect(),
            lists: board.lists.iter().map(Self::encode_list).collect(),
        }
    }

    fn encode_list(list: &List) -> ListDocument {
        ListDocument {
            id: Some(list.id.to_string()),
            title: list.title.clone(),
            cards: list.cards.iter().map(Self::encode_card).collect(),
        }
    }

    fn encode_card(card: &Card) -> CardDocument {
        CardDocument {
            text: card.text.clone(),
            description: card.description.clone().unwrap_or_default(),
            tags: card.tags.clone(),
            checklist: card.checklist.clone(),
        }
    }

    /// Suggested export file name: the title with every character outside
    /// `[A-Za-z0-9_-]` replaced by `_`, plus `-export.json`.
    pub fn export_file_name(title: &str) -> String {
        let title = if title.is_empty() {
            FALLBACK_EXPORT_TITLE
        } else {
            title
        };
        let sanitized: String = title
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{}-export.json", sanitized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChecklistItem, ListId, TagCopy};
    use kanban_core::AppConfig;

    #[test]
    fn test_encode_shape() {
        let mut board = Board::from_config(&AppConfig::default());
        board.tags.register("urgent", "red").unwrap();
        let todo = ListId::from("todo");
        let id = board.add_card(&todo, "Task", None).unwrap();
        let card = board.card_mut(id).unwrap();
        card.apply_tag(TagCopy::new("urgent", "red"));
        card.checklist.push(ChecklistItem::new("step"));

        let value = serde_json::to_value(BoardExporter::encode(&board)).unwrap();
        assert_eq!(value["boardTitle"], "Kanban Board");
        assert_eq!(value["tags"][0]["name"], "urgent");
        assert_eq!(value["lists"][0]["id"], "todo");
        assert_eq!(value["lists"][0]["cards"][0]["text"], "Task");
        assert_eq!(value["lists"][0]["cards"][0]["description"], "");
        assert_eq!(value["lists"][0]["cards"][0]["tags"][0]["color"], "red");
        assert_eq!(value["lists"][0]["cards"][0]["checklist"][0]["checked"], false);
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            BoardExporter::export_file_name("My Board: Q3/Q4"),
            "My_Board__Q3_Q4-export.json"
        );
        assert_eq!(
            BoardExporter::export_file_name("release_2-final"),
            "release_2-final-export.json"
        );
        assert_eq!(
            BoardExporter::export_file_name("Café"),
            "Caf_-export.json"
        );
        assert_eq!(
            BoardExporter::export_file_name(""),
            "trello-board-export.json"
        );
    }
}
