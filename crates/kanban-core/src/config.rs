use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_STORAGE_KEY: &str = "trelloBoard";
pub const DEFAULT_BOARD_TITLE: &str = "Kanban Board";

/// Default lists as `(id, title)` pairs for a board that was never saved.
pub const DEFAULT_LISTS: [(&str, &str); 3] = [
    ("todo", "To Do"),
    ("in-progress", "In Progress"),
    ("done", "Done"),
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListSeed {
    pub id: String,
    pub title: String,
}

/// Line on a card box that a dragged card is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragAnchor {
    #[default]
    Midpoint,
    Top,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage_key: Option<String>,
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub default_board_title: Option<String>,
    #[serde(default)]
    pub default_lists: Option<Vec<ListSeed>>,
    #[serde(default)]
    pub drag_anchor: Option<DragAnchor>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/kanban/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("kanban/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("kanban\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn effective_storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY)
    }

    pub fn effective_board_title(&self) -> &str {
        self.default_board_title
            .as_deref()
            .unwrap_or(DEFAULT_BOARD_TITLE)
    }

    pub fn effective_default_lists(&self) -> Vec<ListSeed> {
        match &self.default_lists {
            Some(lists) => lists.clone(),
            None => DEFAULT_LISTS
                .iter()
                .map(|(id, title)| ListSeed {
                    id: id.to_string(),
                    title: title.to_string(),
                })
                .collect(),
        }
    }

    pub fn effective_drag_anchor(&self) -> DragAnchor {
        self.drag_anchor.unwrap_or_default()
    }

    /// Directory holding the persisted board slot.
    pub fn effective_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join("kanban"))
            .unwrap_or_else(|| PathBuf::from(".kanban"))
    }
}
