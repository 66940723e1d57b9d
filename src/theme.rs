//! Theme management with persisted preference.
//!
//! The controller holds the current theme explicitly; the DOM attribute is
//! only ever written, never read back.

use crate::prefs::PreferenceStore;

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Icon classes for the toggle button: add `show`, remove `hide`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeIcon {
    pub show: &'static str,
    pub hide: &'static str,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn icon(&self) -> ThemeIcon {
        match self {
            Theme::Light => ThemeIcon {
                show: "fa-sun",
                hide: "fa-moon",
            },
            Theme::Dark => ThemeIcon {
                show: "fa-moon",
                hide: "fa-sun",
            },
        }
    }
}

/// Stored value wins, then the OS hint, then light.
pub fn resolve_initial(stored: Option<&str>, os_prefers_dark: bool) -> Theme {
    match stored.and_then(Theme::parse) {
        Some(theme) => theme,
        None if os_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

#[derive(Debug, Clone)]
pub struct ThemeController {
    key: String,
    current: Theme,
}

impl ThemeController {
    /// Load the persisted preference. Unreadable storage counts as no preference.
    pub fn initialize<S: PreferenceStore + ?Sized>(
        store: &S,
        key: &str,
        os_prefers_dark: bool,
    ) -> Self {
        let stored = store.get(key).unwrap_or_else(|e| {
            tracing::warn!("Theme preference unreadable, ignoring: {}", e);
            None
        });
        if let Some(ref raw) = stored {
            if Theme::parse(raw).is_none() {
                tracing::debug!("Unknown stored theme {:?}, ignoring", raw);
            }
        }
        let current = resolve_initial(stored.as_deref(), os_prefers_dark);
        tracing::debug!(
            theme = current.as_str(),
            os_prefers_dark,
            "Theme initialized"
        );
        Self {
            key: key.to_string(),
            current,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip and persist. A failed write still switches the theme for this session.
    pub fn toggle<S: PreferenceStore + ?Sized>(&mut self, store: &S) -> Theme {
        self.current = self.current.toggled();
        if let Err(e) = store.set(&self.key, self.current.as_str()) {
            tracing::warn!("Theme not persisted, session only: {}", e);
        }
        tracing::debug!(theme = self.current.as_str(), "Theme toggled");
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{MemoryStore, StoreError};

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("disabled".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::WriteRejected("quota".into()))
        }
    }

    #[test]
    fn test_resolve_precedence() {
        assert_eq!(resolve_initial(None, false), Theme::Light);
        assert_eq!(resolve_initial(None, true), Theme::Dark);
        assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
        assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
        assert_eq!(resolve_initial(Some("sepia"), true), Theme::Dark);
        assert_eq!(resolve_initial(Some("sepia"), false), Theme::Light);
    }

    #[test]
    fn test_stored_dark_ignores_os() {
        let store = MemoryStore::with_value("theme", "dark");
        let ctl = ThemeController::initialize(&store, "theme", false);
        assert_eq!(ctl.current(), Theme::Dark);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let store = MemoryStore::new();
        let mut ctl = ThemeController::initialize(&store, "theme", false);
        assert_eq!(ctl.toggle(&store), Theme::Dark);
        assert_eq!(ctl.toggle(&store), Theme::Light);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_broken_storage_degrades_to_session() {
        let mut ctl = ThemeController::initialize(&BrokenStore, "theme", true);
        assert_eq!(ctl.current(), Theme::Dark);
        assert_eq!(ctl.toggle(&BrokenStore), Theme::Light);
        assert_eq!(ctl.current(), Theme::Light);
    }

    #[test]
    fn test_icons() {
        assert_eq!(Theme::Dark.icon().show, "fa-moon");
        assert_eq!(Theme::Dark.icon().hide, "fa-sun");
        assert_eq!(Theme::Light.icon().show, "fa-sun");
        assert_eq!(Theme::Light.icon().hide, "fa-moon");
    }
}
