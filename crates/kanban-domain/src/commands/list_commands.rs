use super::{Command, CommandContext};
use crate::{List, ListId};
use kanban_core::KanbanResult;

/// Append a new list
pub struct AddList {
    pub list_id: ListId,
    pub title: String,
}

impl AddList {
    pub fn new(title: String) -> Self {
        Self {
            list_id: ListId::generate(),
            title,
        }
    }
}

impl Command for AddList {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        context
            .board
            .push_list(List::new(self.list_id.clone(), self.title.clone()))
    }

    fn description(&self) -> String {
        format!("Add list: '{}'", self.title)
    }
}

/// Rename a list
pub struct RenameList {
    pub list_id: ListId,
    pub title: String,
}

impl Command for RenameList {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        context.board.rename_list(&self.list_id, self.title.clone())
    }

    fn description(&self) -> String {
        format!("Rename list {} to '{}'", self.list_id, self.title)
    }
}
