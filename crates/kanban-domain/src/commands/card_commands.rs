use super::{Command, CommandContext};
use crate::{CardId, ListId};
use kanban_core::KanbanResult;
use uuid::Uuid;

/// Create a new card at the end of a list
pub struct CreateCard {
    pub list_id: ListId,
    pub card_id: CardId,
    pub text: String,
    pub description: Option<String>,
}

impl CreateCard {
    pub fn new(list_id: ListId, text: String, description: Option<String>) -> Self {
        Self {
            list_id,
            card_id: Uuid::new_v4(),
            text,
            description,
        }
    }
}

impl Command for CreateCard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        context.board.add_card_with_id(
            &self.list_id,
            self.card_id,
            &self.text,
            self.description.clone(),
        )?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create card: '{}'", self.text)
    }
}

/// Rename a card
pub struct RenameCard {
    pub card_id: CardId,
    pub text: String,
}

impl Command for RenameCard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        context.board.rename_card(self.card_id, self.text.clone())
    }

    fn description(&self) -> String {
        format!("Rename card {}", self.card_id)
    }
}

/// Set or clear a card's description
pub struct SetCardDescription {
    pub card_id: CardId,
    pub description: Option<String>,
}

impl Command for SetCardDescription {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        context
            .board
            .set_card_description(self.card_id, self.description.clone())
    }

    fn description(&self) -> String {
        format!("Set description of card {}", self.card_id)
    }
}

/// Permanently delete a card
pub struct DeleteCard {
    pub list_id: ListId,
    pub card_id: CardId,
}

impl Command for DeleteCard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        context.board.delete_card(&self.list_id, self.card_id)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete card {} from list {}", self.card_id, self.list_id)
    }
}

/// Move card to an index of a list
pub struct MoveCard {
    pub card_id: CardId,
    pub list_id: ListId,
    pub index: usize,
}

impl Command for MoveCard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        context
            .board
            .move_card(self.card_id, &self.list_id, self.index)
    }

    fn description(&self) -> String {
        format!(
            "Move card {} to list {} at {}",
            self.card_id, self.list_id, self.index
        )
    }
}

/// Move card before another card, or to the end of a list
pub struct MoveCardBefore {
    pub card_id: CardId,
    pub list_id: ListId,
    pub before: Option<CardId>,
}

impl Command for MoveCardBefore {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        context
            .board
            .move_card_before(self.card_id, &self.list_id, self.before)?;
        Ok(())
    }

    fn description(&self) -> String {
        match self.before {
            Some(before) => format!("Move card {} before {}", self.card_id, before),
            None => format!("Move card {} to end of list {}", self.card_id, self.list_id),
        }
    }
}
