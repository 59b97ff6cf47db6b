use super::{Command, CommandContext};
use kanban_core::KanbanResult;

/// Rename the board
pub struct SetBoardTitle {
    pub title: String,
}

impl Command for SetBoardTitle {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()> {
        context.board.set_title(self.title.clone());
        Ok(())
    }

    fn description(&self) -> String {
        format!("Set board title: '{}'", self.title)
    }
}
