use kanban_domain::{CardId, LayoutSnapshot, ListId, Point, TagId};
use serde::Serialize;

pub const IMPORT_SUCCEEDED: &str = "Board imported successfully!";
pub const IMPORT_FAILED: &str = "Failed to import board. Please check the file format.";

/// One user action handed to [`Session::dispatch`](crate::Session::dispatch)
#[derive(Debug, Clone)]
pub enum Intent {
    SetBoardTitle { title: String },
    AddList { title: String },
    RenameList { list_id: ListId, title: String },

    AddCard {
        list_id: ListId,
        text: String,
        description: Option<String>,
    },
    RenameCard { card_id: CardId, text: String },
    /// Blank text or the placeholder clears the description
    SetCardDescription { card_id: CardId, description: String },
    DeleteCard { list_id: ListId, card_id: CardId },
    MoveCard { card_id: CardId, list_id: ListId, index: usize },

    RegisterTag { name: String, color: String },
    RemoveTag { tag_id: TagId },
    /// Drop a registry tag onto a card
    ApplyTag { card_id: CardId, tag_id: TagId },
    RemoveCardTag { card_id: CardId, name: String },

    OpenDetail { card_id: CardId },
    EditDetailName { name: String },
    EditDetailDescription { description: String },
    CommitDetail,
    CloseDetail,
    AddChecklistItem { text: String },
    EditChecklistItem { index: usize, text: String },
    ToggleChecklistItem { index: usize },
    RemoveChecklistItem { index: usize },

    DragStart { card_id: CardId },
    DragOver { pointer: Point, layout: LayoutSnapshot },
    DragEnd,

    Import { contents: String },
    Reset { confirmed: bool },
}

impl Intent {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Intent::SetBoardTitle { .. } => "set-board-title",
            Intent::AddList { .. } => "add-list",
            Intent::RenameList { .. } => "rename-list",
            Intent::AddCard { .. } => "add-card",
            Intent::RenameCard { .. } => "rename-card",
            Intent::SetCardDescription { .. } => "set-card-description",
            Intent::DeleteCard { .. } => "delete-card",
            Intent::MoveCard { .. } => "move-card",
            Intent::RegisterTag { .. } => "register-tag",
            Intent::RemoveTag { .. } => "remove-tag",
            Intent::ApplyTag { .. } => "apply-tag",
            Intent::RemoveCardTag { .. } => "remove-card-tag",
            Intent::OpenDetail { .. } => "open-detail",
            Intent::EditDetailName { .. } => "edit-detail-name",
            Intent::EditDetailDescription { .. } => "edit-detail-description",
            Intent::CommitDetail => "commit-detail",
            Intent::CloseDetail => "close-detail",
            Intent::AddChecklistItem { .. } => "add-checklist-item",
            Intent::EditChecklistItem { .. } => "edit-checklist-item",
            Intent::ToggleChecklistItem { .. } => "toggle-checklist-item",
            Intent::RemoveChecklistItem { .. } => "remove-checklist-item",
            Intent::DragStart { .. } => "drag-start",
            Intent::DragOver { .. } => "drag-over",
            Intent::DragEnd => "drag-end",
            Intent::Import { .. } => "import",
            Intent::Reset { .. } => "reset",
        }
    }
}

/// User-visible message produced by a dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "lowercase")]
pub enum Notice {
    Info(String),
    Failure(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Info(message) | Notice::Failure(message) => message,
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of one dispatch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// The persisted slot was written (or cleared) successfully
    pub persisted: bool,
    pub notice: Option<Notice>,
    /// Diagnostic recorded for this dispatch, if it failed
    pub error: Option<String>,
}

impl Outcome {
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}
