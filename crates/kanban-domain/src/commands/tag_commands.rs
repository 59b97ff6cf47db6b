use super::{Command, CommandContext};
use crate::{CardId, TagCopy, TagId};
use kanban_core::{KanbanError, KanbanResult};

/// Add an entry to the tag registry
pub struct RegisterTag {
    pub name: String,
    pub color: String,
}

impl Command for RegisterTag {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        context.board.tags.register(&self.name, &self.color)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Register tag: '{}' ({})", self.name, self.color)
    }
}

/// Remove one entry from the tag registry; cards keep their copies
pub struct RemoveTag {
    pub tag_id: TagId,
}

impl Command for RemoveTag {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        context.board.tags.remove(self.tag_id)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Remove tag {}", self.tag_id)
    }
}

/// Copy a tag onto a card; a no-op when the card already has that name
pub struct ApplyTag {
    pub card_id: CardId,
    pub tag: TagCopy,
}

impl Command for ApplyTag {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        context
            .board
            .require_card_mut(self.card_id)?
            .apply_tag(self.tag.clone());
        Ok(())
    }

    fn description(&self) -> String {
        format!("Apply tag '{}' to card {}", self.tag.name, self.card_id)
    }
}

/// Remove a tag copy from a card
pub struct RemoveCardTag {
    pub card_id: CardId,
    pub name: String,
}

impl Command for RemoveCardTag {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        context
            .board
            .require_card_mut(self.card_id)?
            .remove_tag(&self.name)
            .ok_or_else(|| {
                KanbanError::MissingTarget(format!(
                    "tag '{}' on card {}",
                    self.name, self.card_id
                ))
            })?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Remove tag '{}' from card {}", self.name, self.card_id)
    }
}
