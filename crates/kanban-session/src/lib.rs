//! Session layer for the kanban board editor.
//!
//! A [`Session`] owns one board together with the detail view, the drag
//! state, the diagnostic log and the persisted slot. Display surfaces send
//! [`Intent`]s to [`Session::dispatch`] and render the [`BoardView`]
//! projection.

pub mod intent;
pub mod projection;
pub mod session;

pub use intent::{Intent, Notice, Outcome, IMPORT_FAILED, IMPORT_SUCCEEDED};
pub use projection::{BoardView, CardView, DetailPanelView, ListView, TagView};
pub use session::{ExportFile, Session};
