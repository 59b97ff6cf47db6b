//! Card drag-and-drop reordering.
//!
//! The display tree reports list and card bounding boxes as a
//! [`LayoutSnapshot`]; [`DragReorder`] turns a pointer position into a
//! [`DropPlacement`] that the caller applies to the board on every
//! drag-over tick.

pub mod engine;
pub mod geometry;

pub use engine::{closest_card, closest_list, CardAnchor, DragReorder, DropPlacement};
pub use geometry::{CardLayout, LayoutSnapshot, ListLayout, Point, Rect};
