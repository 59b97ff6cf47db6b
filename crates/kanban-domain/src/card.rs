use kanban_core::{KanbanError, KanbanResult};
use uuid::Uuid;

use crate::checklist::ChecklistItem;
use crate::tag::TagCopy;

pub type CardId = Uuid;

/// Text shown in place of an empty description. Presentation only; the
/// model stores `None` instead.
pub const DESCRIPTION_PLACEHOLDER: &str = "Click to add a description...";

/// Highlight color of a card without tags.
pub const NO_TAG_COLOR: &str = "transparent";

/// Maps the "no description" spellings (absent, blank, placeholder) to `None`.
pub fn normalize_description(raw: Option<String>) -> Option<String> {
    raw.filter(|text| {
        let trimmed = text.trim();
        !trimmed.is_empty() && trimmed != DESCRIPTION_PLACEHOLDER
    })
}

pub(crate) fn validate_card_text(text: &str) -> KanbanResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(KanbanError::Validation(
            "Input field is empty or not found.".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub text: String,
    pub description: Option<String>,
    pub tags: Vec<TagCopy>,
    pub checklist: Vec<ChecklistItem>,
}

impl Card {
    pub fn new(text: String, description: Option<String>) -> Self {
        Self::with_id(Uuid::new_v4(), text, description)
    }

    pub fn with_id(id: CardId, text: String, description: Option<String>) -> Self {
        Self {
            id,
            text,
            description: normalize_description(description),
            tags: Vec::new(),
            checklist: Vec::new(),
        }
    }

    pub fn rename(&mut self, text: String) {
        self.text = text;
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = normalize_description(description);
    }

    pub fn description_or_placeholder(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or(DESCRIPTION_PLACEHOLDER)
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name == name)
    }

    /// Appends a tag copy unless one with the same name is already present.
    /// Returns whether the card changed.
    pub fn apply_tag(&mut self, tag: TagCopy) -> bool {
        if self.has_tag(&tag.name) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    pub fn remove_tag(&mut self, name: &str) -> Option<TagCopy> {
        let index = self.tags.iter().position(|t| t.name == name)?;
        Some(self.tags.remove(index))
    }

    /// Border color: the first tag's color, or transparent.
    pub fn highlight_color(&self) -> &str {
        self.tags
            .first()
            .map(|t| t.color.as_str())
            .unwrap_or(NO_TAG_COLOR)
    }

    pub fn set_checklist(&mut self, checklist: Vec<ChecklistItem>) {
        self.checklist = checklist;
    }

    /// `(checked, total)` over the checklist.
    pub fn checklist_progress(&self) -> (usize, usize) {
        let done = self.checklist.iter().filter(|i| i.checked).count();
        (done, self.checklist.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str, color: &str) -> TagCopy {
        TagCopy::new(name, color)
    }

    #[test]
    fn test_apply_tag_is_idempotent_by_name() {
        let mut card = Card::new("Task".to_string(), None);
        assert!(card.apply_tag(tag("A", "red")));
        let before = card.tags.clone();

        assert!(!card.apply_tag(tag("A", "red")));
        assert_eq!(card.tags, before);

        // Same name, different color: first write wins.
        assert!(!card.apply_tag(tag("A", "green")));
        assert_eq!(card.tags, before);
    }

    #[test]
    fn test_apply_tag_is_case_sensitive() {
        let mut card = Card::new("Task".to_string(), None);
        assert!(card.apply_tag(tag("bug", "red")));
        assert!(card.apply_tag(tag("Bug", "red")));
        assert_eq!(card.tags.len(), 2);
    }

    #[test]
    fn test_highlight_follows_first_tag() {
        let mut card = Card::new("Task".to_string(), None);
        assert_eq!(card.highlight_color(), NO_TAG_COLOR);

        card.apply_tag(tag("A", "red"));
        card.apply_tag(tag("B", "blue"));
        assert_eq!(card.highlight_color(), "red");

        card.remove_tag("A");
        assert_eq!(card.highlight_color(), "blue");

        card.remove_tag("B");
        assert_eq!(card.highlight_color(), "transparent");
    }

    #[test]
    fn test_remove_missing_tag_is_none() {
        let mut card = Card::new("Task".to_string(), None);
        assert!(card.remove_tag("nope").is_none());
    }

    #[test]
    fn test_description_normalization() {
        assert_eq!(normalize_description(None), None);
        assert_eq!(normalize_description(Some(String::new())), None);
        assert_eq!(normalize_description(Some("   ".to_string())), None);
        assert_eq!(
            normalize_description(Some(DESCRIPTION_PLACEHOLDER.to_string())),
            None
        );
        assert_eq!(
            normalize_description(Some("Ship it".to_string())),
            Some("Ship it".to_string())
        );
    }

    #[test]
    fn test_placeholder_only_at_presentation() {
        let mut card = Card::new("Task".to_string(), Some(DESCRIPTION_PLACEHOLDER.into()));
        assert_eq!(card.description, None);
        assert_eq!(card.description_or_placeholder(), DESCRIPTION_PLACEHOLDER);

        card.set_description(Some("Details".to_string()));
        assert_eq!(card.description_or_placeholder(), "Details");
    }

    #[test]
    fn test_checklist_progress() {
        let mut card = Card::new("Task".to_string(), None);
        let mut done = ChecklistItem::new("a");
        done.toggle();
        card.set_checklist(vec![done, ChecklistItem::new("b")]);
        assert_eq!(card.checklist_progress(), (1, 2));
    }

    #[test]
    fn test_validate_card_text() {
        assert_eq!(validate_card_text("  hi  ").unwrap(), "hi");
        assert!(matches!(
            validate_card_text(" \t"),
            Err(KanbanError::Validation(_))
        ));
    }
}
