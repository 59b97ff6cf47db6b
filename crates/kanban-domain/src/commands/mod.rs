use kanban_core::KanbanResult;

pub mod board_commands;
pub mod card_commands;
pub mod list_commands;
pub mod tag_commands;

pub use board_commands::*;
pub use card_commands::*;
pub use list_commands::*;
pub use tag_commands::*;

/// Trait for domain commands that mutate state
/// Commands represent intent and can be executed and described for logs
pub trait Command: Send + Sync {
    /// Execute this command, mutating the board
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation
pub struct CommandContext<'a> {
    pub board: &'a mut crate::Board,
}
