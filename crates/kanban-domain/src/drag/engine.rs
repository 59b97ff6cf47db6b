use super::geometry::{CardLayout, LayoutSnapshot, ListLayout, Point};
use crate::card::CardId;
use crate::list::ListId;
use kanban_core::DragAnchor;

/// Reference line on a card box that the pointer is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardAnchor {
    /// Vertical middle of the card.
    #[default]
    Midpoint,
    /// Top edge of the card.
    Top,
}

impl From<DragAnchor> for CardAnchor {
    fn from(anchor: DragAnchor) -> Self {
        match anchor {
            DragAnchor::Midpoint => CardAnchor::Midpoint,
            DragAnchor::Top => CardAnchor::Top,
        }
    }
}

impl CardAnchor {
    fn offset(self, y: f64, card: &CardLayout) -> f64 {
        match self {
            CardAnchor::Midpoint => y - card.bounds.center_y(),
            CardAnchor::Top => y - card.bounds.top,
        }
    }
}

/// Where the dragged card should go: before `before`, or at the end of the
/// list when `before` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropPlacement {
    pub list_id: ListId,
    pub before: Option<CardId>,
}

/// Picks the list whose horizontal center is nearest to the right of the
/// pointer among lists whose vertical span contains it. Ties keep the
/// earlier list.
pub fn closest_list(lists: &[ListLayout], pointer: Point) -> Option<&ListLayout> {
    let mut best: Option<(f64, &ListLayout)> = None;
    for list in lists {
        let offset_x = pointer.x - list.bounds.center_x();
        if offset_x >= 0.0 || !list.bounds.spans_y(pointer.y) {
            continue;
        }
        if best.map_or(true, |(best_offset, _)| offset_x > best_offset) {
            best = Some((offset_x, list));
        }
    }
    best.map(|(_, list)| list)
}

/// Picks the nearest card whose anchor lies below `y`, ignoring `exclude`.
pub fn closest_card(
    cards: &[CardLayout],
    y: f64,
    exclude: Option<CardId>,
    anchor: CardAnchor,
) -> Option<CardId> {
    let mut best: Option<(f64, CardId)> = None;
    for card in cards {
        if Some(card.card_id) == exclude {
            continue;
        }
        let offset = anchor.offset(y, card);
        if offset >= 0.0 {
            continue;
        }
        if best.map_or(true, |(best_offset, _)| offset > best_offset) {
            best = Some((offset, card.card_id));
        }
    }
    best.map(|(_, id)| id)
}

/// Drag state for at most one card.
#[derive(Debug, Clone, Default)]
pub struct DragReorder {
    dragged: Option<CardId>,
    anchor: CardAnchor,
}

impl DragReorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor(anchor: CardAnchor) -> Self {
        Self {
            dragged: None,
            anchor,
        }
    }

    pub fn start(&mut self, card_id: CardId) {
        self.dragged = Some(card_id);
    }

    pub fn dragged(&self) -> Option<CardId> {
        self.dragged
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    pub fn anchor(&self) -> CardAnchor {
        self.anchor
    }

    /// Placement for the dragged card at `pointer`, or `None` when nothing is
    /// being dragged or no list qualifies.
    pub fn target(&self, layout: &LayoutSnapshot, pointer: Point) -> Option<DropPlacement> {
        let dragged = self.dragged?;
        let list = closest_list(&layout.lists, pointer)?;
        let before = closest_card(&list.cards, pointer.y, Some(dragged), self.anchor);
        Some(DropPlacement {
            list_id: list.list_id.clone(),
            before,
        })
    }

    /// Clears the drag state, returning the card that was being dragged.
    pub fn end(&mut self) -> Option<CardId> {
        self.dragged.take()
    }
}
