//! Board document codec.
//!
//! Converts the in-memory [`Board`](crate::Board) to and from the JSON
//! document used for the persisted slot, exports and imports. Decoding is
//! permissive: only text that is not a JSON object is rejected.

pub mod exporter;
pub mod importer;
pub mod lenient;
pub mod models;

pub use exporter::BoardExporter;
pub use importer::BoardImporter;
pub use models::{BoardDocument, CardDocument, ListDocument};

use crate::Board;

pub fn encode(board: &Board) -> BoardDocument {
    BoardExporter::encode(board)
}

pub fn decode(document: BoardDocument, fallback_title: &str) -> Board {
    BoardImporter::decode(document, fallback_title)
}
