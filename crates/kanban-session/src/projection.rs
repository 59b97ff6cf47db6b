//! Render-ready snapshot of a session for the display tree.

use kanban_core::LogEntry;
use kanban_domain::{
    Board, Card, CardDraft, CardId, ChecklistItem, DetailView, DragReorder, List, ListId, Tag,
    TagCopy, TagId,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagView {
    pub id: TagId,
    pub name: String,
    pub color: String,
}

impl From<&Tag> for TagView {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name.clone(),
            color: tag.color.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub id: CardId,
    pub text: String,
    /// Description text, or the placeholder when there is none
    pub description: String,
    pub has_description: bool,
    pub tags: Vec<TagCopy>,
    pub highlight_color: String,
    pub checklist_done: usize,
    pub checklist_total: usize,
    pub dragging: bool,
}

impl CardView {
    fn project(card: &Card, dragged: Option<CardId>) -> Self {
        let (checklist_done, checklist_total) = card.checklist_progress();
        Self {
            id: card.id,
            text: card.text.clone(),
            description: card.description_or_placeholder().to_string(),
            has_description: card.description.is_some(),
            tags: card.tags.clone(),
            highlight_color: card.highlight_color().to_string(),
            checklist_done,
            checklist_total,
            dragging: dragged == Some(card.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView {
    pub id: ListId,
    pub title: String,
    pub cards: Vec<CardView>,
}

impl ListView {
    fn project(list: &List, dragged: Option<CardId>) -> Self {
        Self {
            id: list.id.clone(),
            title: list.title.clone(),
            cards: list
                .cards
                .iter()
                .map(|card| CardView::project(card, dragged))
                .collect(),
        }
    }
}

/// The expanded card, showing pending edits rather than the stored card.
/// Tags are applied straight to the board, so they come from the card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailPanelView {
    pub card_id: CardId,
    pub name: String,
    pub description: String,
    pub tags: Vec<TagCopy>,
    pub checklist: Vec<ChecklistItem>,
}

impl DetailPanelView {
    fn project(draft: &CardDraft, board: &Board) -> Self {
        let tags = board
            .card(draft.card_id)
            .map(|card| card.tags.clone())
            .unwrap_or_else(|| draft.tags.clone());
        Self {
            card_id: draft.card_id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            tags,
            checklist: draft.checklist.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    pub title: String,
    pub tags: Vec<TagView>,
    pub lists: Vec<ListView>,
    pub detail: Option<DetailPanelView>,
    pub dragging: Option<CardId>,
    /// Rendered diagnostic log, oldest first
    pub diagnostics: Vec<String>,
}

impl BoardView {
    pub fn project(
        board: &Board,
        detail: &DetailView,
        drag: &DragReorder,
        logs: &[LogEntry],
    ) -> Self {
        let dragged = drag.dragged();
        Self {
            title: board.title.clone(),
            tags: board.tags.iter().map(TagView::from).collect(),
            lists: board
                .lists
                .iter()
                .map(|list| ListView::project(list, dragged))
                .collect(),
            detail: detail
                .draft()
                .map(|draft| DetailPanelView::project(draft, board)),
            dragging: dragged,
            diagnostics: logs.iter().map(LogEntry::render).collect(),
        }
    }

    pub fn list(&self, list_id: &ListId) -> Option<&ListView> {
        self.lists.iter().find(|l| &l.id == list_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanban_domain::DESCRIPTION_PLACEHOLDER;

    #[test]
    fn test_projection_applies_placeholder_and_highlight() {
        let mut board = Board::new("Board".to_string());
        let list_id = board.add_list("To Do".to_string());
        let card_id = board.add_card(&list_id, "Plain", None).unwrap();
        let tagged = board
            .add_card(&list_id, "Tagged", Some("notes".to_string()))
            .unwrap();
        board
            .card_mut(tagged)
            .unwrap()
            .apply_tag(TagCopy::new("urgent", "red"));

        let view = BoardView::project(&board, &DetailView::new(), &DragReorder::new(), &[]);
        let cards = &view.list(&list_id).unwrap().cards;

        assert_eq!(cards[0].id, card_id);
        assert_eq!(cards[0].description, DESCRIPTION_PLACEHOLDER);
        assert!(!cards[0].has_description);
        assert_eq!(cards[0].highlight_color, "transparent");

        assert_eq!(cards[1].description, "notes");
        assert_eq!(cards[1].highlight_color, "red");
    }

    #[test]
    fn test_projection_marks_dragged_card() {
        let mut board = Board::new("Board".to_string());
        let list_id = board.add_list("To Do".to_string());
        let card_id = board.add_card(&list_id, "Moving", None).unwrap();

        let mut drag = DragReorder::new();
        drag.start(card_id);

        let view = BoardView::project(&board, &DetailView::new(), &drag, &[]);
        assert_eq!(view.dragging, Some(card_id));
        assert!(view.lists[0].cards[0].dragging);
    }

    #[test]
    fn test_diagnostics_are_rendered() {
        let board = Board::new("Board".to_string());
        let logs = vec![LogEntry::new("Missing target: card x".to_string())];

        let view = BoardView::project(&board, &DetailView::new(), &DragReorder::new(), &logs);
        assert_eq!(view.diagnostics, vec!["[Error] Missing target: card x"]);
    }
}
