//! Expanded editing surface for a single card.
//!
//! Opening a card copies it into a [`CardDraft`]. Name and description edits
//! stay in the draft until the view is flushed: explicitly, on close, or when
//! another card is opened.

use kanban_core::{KanbanError, KanbanResult};

use crate::board::{Board, CardDetails};
use crate::card::{normalize_description, Card, CardId};
use crate::checklist::ChecklistItem;
use crate::tag::TagCopy;

#[derive(Debug, Clone, PartialEq)]
pub struct CardDraft {
    pub card_id: CardId,
    pub name: String,
    /// Editable description text; empty means "no description".
    pub description: String,
    /// Read-only chips.
    pub tags: Vec<TagCopy>,
    pub checklist: Vec<ChecklistItem>,
}

impl CardDraft {
    fn from_card(card: &Card) -> Self {
        Self {
            card_id: card.id,
            name: card.text.clone(),
            description: card.description.clone().unwrap_or_default(),
            tags: card.tags.clone(),
            checklist: card.checklist.clone(),
        }
    }

    fn to_details(&self) -> CardDetails {
        CardDetails {
            card_id: self.card_id,
            text: self.name.clone(),
            description: normalize_description(Some(self.description.clone())),
            checklist: self.checklist.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DetailView {
    draft: Option<CardDraft>,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<CardId> {
        self.draft.as_ref().map(|d| d.card_id)
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&CardDraft> {
        self.draft.as_ref()
    }

    fn draft_mut(&mut self) -> KanbanResult<&mut CardDraft> {
        self.draft
            .as_mut()
            .ok_or_else(|| KanbanError::MissingTarget("no card is open".to_string()))
    }

    /// Opens `card_id`, flushing the card that was open before. Returns
    /// whether a flush happened.
    pub fn open(&mut self, board: &mut Board, card_id: CardId) -> KanbanResult<bool> {
        if board.card(card_id).is_none() {
            return Err(KanbanError::missing_card(card_id));
        }
        let flushed = match self.draft.take() {
            Some(previous) => {
                board.update_card_details(previous.to_details())?;
                true
            }
            None => false,
        };
        let card = board
            .card(card_id)
            .ok_or_else(|| KanbanError::missing_card(card_id))?;
        self.draft = Some(CardDraft::from_card(card));
        Ok(flushed)
    }

    /// Writes pending edits into the board and keeps the view open.
    pub fn flush(&mut self, board: &mut Board) -> KanbanResult<bool> {
        match &self.draft {
            Some(draft) => {
                board.update_card_details(draft.to_details())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Flushes and closes. A stale draft is dropped even when the flush
    /// fails.
    pub fn close(&mut self, board: &mut Board) -> KanbanResult<bool> {
        match self.draft.take() {
            Some(draft) => {
                board.update_card_details(draft.to_details())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Closes without flushing.
    pub fn discard(&mut self) {
        self.draft = None;
    }

    pub fn set_name(&mut self, name: String) -> KanbanResult<()> {
        self.draft_mut()?.name = name;
        Ok(())
    }

    pub fn set_description(&mut self, description: String) -> KanbanResult<()> {
        self.draft_mut()?.description = description;
        Ok(())
    }

    pub fn add_checklist_item(&mut self, text: String) -> KanbanResult<usize> {
        let draft = self.draft_mut()?;
        draft.checklist.push(ChecklistItem::new(text));
        Ok(draft.checklist.len() - 1)
    }

    fn checklist_item_mut(&mut self, index: usize) -> KanbanResult<&mut ChecklistItem> {
        self.draft_mut()?
            .checklist
            .get_mut(index)
            .ok_or_else(|| KanbanError::MissingTarget(format!("checklist item {}", index)))
    }

    pub fn set_checklist_text(&mut self, index: usize, text: String) -> KanbanResult<()> {
        self.checklist_item_mut(index)?.text = text;
        Ok(())
    }

    pub fn toggle_checklist_item(&mut self, index: usize) -> KanbanResult<bool> {
        Ok(self.checklist_item_mut(index)?.toggle())
    }

    pub fn remove_checklist_item(&mut self, index: usize) -> KanbanResult<ChecklistItem> {
        let draft = self.draft_mut()?;
        if index >= draft.checklist.len() {
            return Err(KanbanError::MissingTarget(format!(
                "checklist item {}",
                index
            )));
        }
        Ok(draft.checklist.remove(index))
    }
}
