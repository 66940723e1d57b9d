//! Theme preference survives reloads.
//!
//! A "reload" is a fresh ThemeController over the same store.

use portfolio_site::prefs::{MemoryStore, PreferenceStore};
use portfolio_site::theme::{Theme, ThemeController};

const KEY: &str = "theme";

#[test]
fn test_first_visit_follows_os() {
    let store = MemoryStore::new();
    assert_eq!(
        ThemeController::initialize(&store, KEY, false).current(),
        Theme::Light
    );
    assert_eq!(
        ThemeController::initialize(&store, KEY, true).current(),
        Theme::Dark
    );
    // Initialization alone never writes
    assert_eq!(store.get(KEY).unwrap(), None);
}

#[test]
fn test_toggle_survives_reload() {
    let store = MemoryStore::new();

    let mut first = ThemeController::initialize(&store, KEY, false);
    assert_eq!(first.toggle(&store), Theme::Dark);

    // OS now says light, but the stored choice wins
    let reloaded = ThemeController::initialize(&store, KEY, false);
    assert_eq!(reloaded.current(), Theme::Dark);
}

#[test]
fn test_every_toggle_is_persisted() {
    let store = MemoryStore::new();
    let mut ctl = ThemeController::initialize(&store, KEY, true);

    for _ in 0..5 {
        let theme = ctl.toggle(&store);
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some(theme.as_str()));
        assert_eq!(
            ThemeController::initialize(&store, KEY, false).current(),
            theme
        );
    }
}

#[test]
fn test_garbage_preference_falls_back_to_os() {
    let store = MemoryStore::with_value(KEY, "solarized");
    assert_eq!(
        ThemeController::initialize(&store, KEY, true).current(),
        Theme::Dark
    );
}

#[test]
fn test_custom_key_is_isolated() {
    let store = MemoryStore::with_value(KEY, "dark");
    let mut ctl = ThemeController::initialize(&store, "portfolio-theme", false);
    assert_eq!(ctl.current(), Theme::Light);

    ctl.toggle(&store);
    assert_eq!(store.get("portfolio-theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(store.get(KEY).unwrap().as_deref(), Some("dark"));
}
