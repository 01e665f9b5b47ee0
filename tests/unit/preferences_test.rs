//! Tests for the theme preference store

use cleanmate::models::Theme;
use cleanmate::preferences::{PreferenceStore, THEME_KEY};
use cleanmate::storage::{KeyValueStore, MemoryStore};

use crate::common::{FlakyStore, UnreadableStore};

#[test]
fn test_load_absent_is_light() {
    let kv = MemoryStore::new();
    let prefs = PreferenceStore::new(&kv);
    assert!(!prefs.load());
    assert_eq!(prefs.theme(), Theme::Light);
}

#[test]
fn test_load_dark() {
    let kv = MemoryStore::with_entries([(THEME_KEY, "dark")]);
    assert!(PreferenceStore::new(&kv).load());
}

#[test]
fn test_load_other_values_are_light() {
    for raw in ["light", "Dark", "\"dark\"", "", "true"] {
        let kv = MemoryStore::with_entries([(THEME_KEY, raw)]);
        assert!(!PreferenceStore::new(&kv).load(), "expected light for {raw:?}");
    }
}

#[test]
fn test_load_unreadable_is_light() {
    assert!(!PreferenceStore::new(UnreadableStore).load());
}

#[test]
fn test_toggle_twice() {
    let kv = MemoryStore::new();
    let prefs = PreferenceStore::new(&kv);
    let start = prefs.load();
    assert!(!start);

    let first = prefs.toggle(start).unwrap();
    assert!(first);
    assert_eq!(kv.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    assert!(prefs.load());

    let second = prefs.toggle(first).unwrap();
    assert!(!second);
    assert_eq!(kv.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    assert!(!prefs.load());
}

#[test]
fn test_set_toggled_theme_round_trips() {
    let kv = MemoryStore::with_entries([(THEME_KEY, "dark")]);
    let prefs = PreferenceStore::new(&kv);

    prefs.set(prefs.theme().toggled()).unwrap();
    assert_eq!(prefs.theme(), Theme::Light);
    assert_eq!(kv.get(THEME_KEY).unwrap().as_deref(), Some("light"));
}

#[test]
fn test_toggle_write_failure_propagates() {
    let kv = FlakyStore::new();
    kv.fail_writes(true);
    let prefs = PreferenceStore::new(&kv);
    assert!(prefs.toggle(false).is_err());
    assert!(!prefs.load());
}

#[test]
fn test_theme_independent_of_tasks() {
    let kv = MemoryStore::new();
    PreferenceStore::new(&kv).set(Theme::Dark).unwrap();
    assert_eq!(kv.len(), 1);
    assert_eq!(kv.get("tasks").unwrap(), None);
}
