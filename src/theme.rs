/// Light/dark theme preference
use crate::config::THEME_STORAGE_KEY;
use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle button icon: offers the opposite theme
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    /// Saved preference, light when missing or unreadable
    pub fn load<S: KeyValueStore>(storage: &S) -> Theme {
        storage
            .get_item(THEME_STORAGE_KEY)
            .ok()
            .flatten()
            .and_then(|value| Theme::parse(&value))
            .unwrap_or_default()
    }

    pub fn save<S: KeyValueStore>(self, storage: &S) -> Result<(), StorageError> {
        storage.set_item(THEME_STORAGE_KEY, self.as_str())
    }

    /// Set `data-theme` on the document root
    pub fn apply(self) {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());

        if let Some(root) = root {
            if let Err(e) = root.set_attribute("data-theme", self.as_str()) {
                log::warn!("Failed to apply theme: {:?}", e);
            }
        }
    }
}
