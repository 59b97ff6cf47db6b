use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kanban")]
#[command(about = "A kanban board editor", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Directory holding the saved board (or set KANBAN_DATA_DIR env var)
    #[arg(long, value_name = "DIR", env = "KANBAN_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the whole board (default)
    Show,
    /// Board operations
    Board(BoardCommand),
    /// List operations
    List(ListCommand),
    /// Card operations
    Card(CardCommand),
    /// Tag registry and card tag operations
    Tag(TagCommand),
    /// Card checklist operations
    Checklist(ChecklistCommand),
    /// Export the board to a JSON file
    Export(ExportArgs),
    /// Replace the board with an exported JSON file
    Import(ImportArgs),
    /// Discard the saved board and start over from defaults
    Reset {
        /// Confirm the reset; nothing happens without it
        #[arg(long)]
        yes: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Addresses a card by its list and position
#[derive(Args, Clone)]
pub struct CardRef {
    /// List id
    #[arg(long)]
    pub list: String,
    /// Zero-based position within the list
    #[arg(long)]
    pub index: usize,
}

// Board commands
#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Set the board title
    Title {
        #[arg(long)]
        title: String,
    },
}

// List commands
#[derive(Args)]
pub struct ListCommand {
    #[command(subcommand)]
    pub action: ListAction,
}

#[derive(Subcommand)]
pub enum ListAction {
    /// Append a new list
    Add {
        #[arg(long)]
        title: String,
    },
    /// Rename a list
    Rename {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
    },
}

// Card commands
#[derive(Args)]
pub struct CardCommand {
    #[command(subcommand)]
    pub action: CardAction,
}

#[derive(Subcommand)]
pub enum CardAction {
    /// Add a card to the end of a list
    Add {
        #[arg(long)]
        list: String,
        #[arg(long)]
        text: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Rename a card
    Rename {
        #[command(flatten)]
        card: CardRef,
        #[arg(long)]
        text: String,
    },
    /// Set a card's description; an empty value clears it
    Describe {
        #[command(flatten)]
        card: CardRef,
        #[arg(long)]
        description: String,
    },
    /// Delete a card
    Delete {
        #[command(flatten)]
        card: CardRef,
    },
    /// Move a card to another list or position
    Move {
        #[command(flatten)]
        card: CardRef,
        #[arg(long)]
        to_list: String,
        /// Target position; past the end appends
        #[arg(long)]
        position: usize,
    },
}

// Tag commands
#[derive(Args)]
pub struct TagCommand {
    #[command(subcommand)]
    pub action: TagAction,
}

#[derive(Subcommand)]
pub enum TagAction {
    /// Register a tag
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        color: String,
    },
    /// Remove a registered tag by position; cards keep their copies
    Remove {
        #[arg(long)]
        tag: usize,
    },
    /// Apply a registered tag to a card
    Apply {
        #[command(flatten)]
        card: CardRef,
        /// Position of the tag in the registry
        #[arg(long)]
        tag: usize,
    },
    /// Remove a tag from a card by name
    Unapply {
        #[command(flatten)]
        card: CardRef,
        #[arg(long)]
        name: String,
    },
}

// Checklist commands
#[derive(Args)]
pub struct ChecklistCommand {
    #[command(subcommand)]
    pub action: ChecklistAction,
}

#[derive(Subcommand)]
pub enum ChecklistAction {
    /// Append a checklist item
    Add {
        #[command(flatten)]
        card: CardRef,
        #[arg(long)]
        text: String,
    },
    /// Change a checklist item's text
    Edit {
        #[command(flatten)]
        card: CardRef,
        #[arg(long)]
        item: usize,
        #[arg(long)]
        text: String,
    },
    /// Toggle a checklist item
    Toggle {
        #[command(flatten)]
        card: CardRef,
        #[arg(long)]
        item: usize,
    },
    /// Remove a checklist item
    Remove {
        #[command(flatten)]
        card: CardRef,
        #[arg(long)]
        item: usize,
    },
}

// Export/Import
#[derive(Args)]
pub struct ExportArgs {
    /// Output path (defaults to the suggested file name in the current directory)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    /// Print the export to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Path to an exported board file
    #[arg(long)]
    pub file: PathBuf,
}
