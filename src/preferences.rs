//! Theme preference
//!
//! A single persisted flag deciding between the light and dark presentation.
//! It lives under its own key, independent of the task list.

use crate::models::Theme;
use crate::storage::{KeyValueStore, StorageError};

/// Storage key for the theme preference
pub const THEME_KEY: &str = "theme";

/// Persisted dark-mode flag
#[derive(Debug)]
pub struct PreferenceStore<S> {
    storage: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Create a preference store over `storage`
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Whether dark mode is on
    ///
    /// Only the stored value `"dark"` counts; anything else, including a
    /// missing or unreadable value, means light.
    #[must_use]
    pub fn load(&self) -> bool {
        match self.storage.get(THEME_KEY) {
            Ok(Some(raw)) => {
                let dark = raw == Theme::Dark.as_str();
                if !dark && raw != Theme::Light.as_str() {
                    log::warn!("Ignoring unknown theme value '{raw}'");
                }
                dark
            },
            Ok(None) => false,
            Err(e) => {
                log::warn!("Could not read theme preference: {e}");
                false
            },
        }
    }

    /// The stored theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::from(self.load())
    }

    /// Flip the flag and persist the new value
    pub fn toggle(&self, current: bool) -> Result<bool, StorageError> {
        let next = Theme::from(current).toggled();
        self.set(next)?;
        Ok(next.is_dark())
    }

    /// Persist a specific theme
    pub fn set(&self, theme: Theme) -> Result<(), StorageError> {
        log::debug!("Switching theme to {theme}");
        self.storage.set(THEME_KEY, theme.as_str())
    }
}
