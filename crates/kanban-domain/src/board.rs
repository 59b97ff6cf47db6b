use kanban_core::{AppConfig, KanbanError, KanbanResult};
use uuid::Uuid;

use crate::card::{validate_card_text, Card, CardId};
use crate::checklist::ChecklistItem;
use crate::list::{List, ListId};
use crate::tag::TagRegistry;

/// Pending edits for one card, as collected by the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDetails {
    pub card_id: CardId,
    pub text: String,
    pub description: Option<String>,
    pub checklist: Vec<ChecklistItem>,
}

/// The authoritative board state: title, tag registry and ordered lists.
///
/// Mutators never perform I/O and always leave the board ready to encode.
#[derive(Debug, Clone)]
pub struct Board {
    pub title: String,
    pub tags: TagRegistry,
    pub lists: Vec<List>,
}

impl Board {
    pub fn new(title: String) -> Self {
        Self {
            title,
            tags: TagRegistry::new(),
            lists: Vec::new(),
        }
    }

    /// Board used when nothing has been persisted yet.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut board = Self::new(config.effective_board_title().to_string());
        board.lists = config
            .effective_default_lists()
            .into_iter()
            .map(|seed| List::new(ListId::new(seed.id), seed.title))
            .collect();
        board
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn add_list(&mut self, title: String) -> ListId {
        let id = ListId::generate();
        self.lists.push(List::new(id.clone(), title));
        id
    }

    pub fn push_list(&mut self, list: List) -> KanbanResult<()> {
        if self.list(&list.id).is_some() {
            return Err(KanbanError::Validation(format!(
                "list {} already exists",
                list.id
            )));
        }
        self.lists.push(list);
        Ok(())
    }

    pub fn rename_list(&mut self, list_id: &ListId, title: String) -> KanbanResult<()> {
        self.list_mut(list_id)
            .ok_or_else(|| KanbanError::missing_list(list_id))?
            .rename(title);
        Ok(())
    }

    pub fn list(&self, list_id: &ListId) -> Option<&List> {
        self.lists.iter().find(|l| &l.id == list_id)
    }

    pub fn list_mut(&mut self, list_id: &ListId) -> Option<&mut List> {
        self.lists.iter_mut().find(|l| &l.id == list_id)
    }

    fn list_index(&self, list_id: &ListId) -> KanbanResult<usize> {
        self.lists
            .iter()
            .position(|l| &l.id == list_id)
            .ok_or_else(|| KanbanError::missing_list(list_id))
    }

    pub fn add_card(
        &mut self,
        list_id: &ListId,
        text: &str,
        description: Option<String>,
    ) -> KanbanResult<CardId> {
        self.add_card_with_id(list_id, Uuid::new_v4(), text, description)
    }

    pub fn add_card_with_id(
        &mut self,
        list_id: &ListId,
        card_id: CardId,
        text: &str,
        description: Option<String>,
    ) -> KanbanResult<CardId> {
        let text = validate_card_text(text)?;
        let list = self
            .list_mut(list_id)
            .ok_or_else(|| KanbanError::missing_list(list_id))?;
        list.cards.push(Card::with_id(card_id, text, description));
        Ok(card_id)
    }

    /// `(list index, card index)` of a card.
    pub fn locate_card(&self, card_id: CardId) -> Option<(usize, usize)> {
        self.lists.iter().enumerate().find_map(|(list_index, list)| {
            list.position_of(card_id)
                .map(|card_index| (list_index, card_index))
        })
    }

    pub fn card(&self, card_id: CardId) -> Option<&Card> {
        let (l, c) = self.locate_card(card_id)?;
        Some(&self.lists[l].cards[c])
    }

    pub fn card_mut(&mut self, card_id: CardId) -> Option<&mut Card> {
        let (l, c) = self.locate_card(card_id)?;
        Some(&mut self.lists[l].cards[c])
    }

    pub fn require_card_mut(&mut self, card_id: CardId) -> KanbanResult<&mut Card> {
        self.card_mut(card_id)
            .ok_or_else(|| KanbanError::missing_card(card_id))
    }

    pub fn list_of_card(&self, card_id: CardId) -> Option<&ListId> {
        self.locate_card(card_id).map(|(l, _)| &self.lists[l].id)
    }

    pub fn rename_card(&mut self, card_id: CardId, text: String) -> KanbanResult<()> {
        self.require_card_mut(card_id)?.rename(text);
        Ok(())
    }

    pub fn set_card_description(
        &mut self,
        card_id: CardId,
        description: Option<String>,
    ) -> KanbanResult<()> {
        self.require_card_mut(card_id)?.set_description(description);
        Ok(())
    }

    pub fn update_card_details(&mut self, details: CardDetails) -> KanbanResult<()> {
        let card = self.require_card_mut(details.card_id)?;
        card.rename(details.text);
        card.set_description(details.description);
        card.set_checklist(details.checklist);
        Ok(())
    }

    pub fn delete_card(&mut self, list_id: &ListId, card_id: CardId) -> KanbanResult<Card> {
        let list = self
            .list_mut(list_id)
            .ok_or_else(|| KanbanError::missing_list(list_id))?;
        let index = list
            .position_of(card_id)
            .ok_or_else(|| KanbanError::missing_card(card_id))?;
        Ok(list.cards.remove(index))
    }

    fn take_card(&mut self, card_id: CardId) -> KanbanResult<(usize, usize, Card)> {
        let (l, c) = self
            .locate_card(card_id)
            .ok_or_else(|| KanbanError::missing_card(card_id))?;
        let card = self.lists[l].cards.remove(c);
        Ok((l, c, card))
    }

    /// Moves a card to `target_index` of the target list. The index refers
    /// to the target list with the moved card already taken out, and is
    /// clamped to its length.
    pub fn move_card(
        &mut self,
        card_id: CardId,
        target_list_id: &ListId,
        target_index: usize,
    ) -> KanbanResult<()> {
        let target = self.list_index(target_list_id)?;
        let (_, _, card) = self.take_card(card_id)?;
        let cards = &mut self.lists[target].cards;
        let index = target_index.min(cards.len());
        cards.insert(index, card);
        Ok(())
    }

    /// Moves a card directly before `before` in the target list, or to its
    /// end. Returns whether the card's position changed.
    pub fn move_card_before(
        &mut self,
        card_id: CardId,
        target_list_id: &ListId,
        before: Option<CardId>,
    ) -> KanbanResult<bool> {
        if before == Some(card_id) {
            return Ok(false);
        }
        let target = self.list_index(target_list_id)?;
        if let Some(anchor) = before {
            if self.lists[target].position_of(anchor).is_none() {
                return Err(KanbanError::missing_card(anchor));
            }
        }

        let (from_list, from_index, card) = self.take_card(card_id)?;
        let cards = &mut self.lists[target].cards;
        let index = match before {
            Some(anchor) => cards
                .iter()
                .position(|c| c.id == anchor)
                .unwrap_or(cards.len()),
            None => cards.len(),
        };
        cards.insert(index, card);
        Ok(from_list != target || from_index != index)
    }

    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|l| l.cards.len()).sum()
    }
}
