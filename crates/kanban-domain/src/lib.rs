pub mod board;
pub mod card;
pub mod checklist;
pub mod codec;
pub mod commands;
pub mod detail_view;
pub mod drag;
pub mod list;
pub mod tag;

pub use board::{Board, CardDetails};
pub use card::{Card, CardId, DESCRIPTION_PLACEHOLDER, NO_TAG_COLOR};
pub use checklist::ChecklistItem;
pub use codec::{BoardDocument, BoardExporter, BoardImporter};
pub use detail_view::{CardDraft, DetailView};
pub use drag::{CardAnchor, DragReorder, DropPlacement, LayoutSnapshot, Point, Rect};
pub use list::{List, ListId};
pub use tag::{Tag, TagCopy, TagId, TagRegistry};
