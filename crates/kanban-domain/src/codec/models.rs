//! Document shapes. Field names follow the stored JSON
//! (`boardTitle`, `lists[].cards[].checklist`, ...).

use serde::{Deserialize, Serialize};

use super::lenient;
use crate::checklist::ChecklistItem;
use crate::tag::TagCopy;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDocument {
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub board_title: Option<String>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub tags: Vec<TagCopy>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub lists: Vec<ListDocument>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListDocument {
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub cards: Vec<CardDocument>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CardDocument {
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub tags: Vec<TagCopy>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub checklist: Vec<ChecklistItem>,
}
