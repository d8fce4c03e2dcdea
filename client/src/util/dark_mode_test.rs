#![cfg(not(feature = "hydrate"))]

use std::cell::RefCell;
use std::collections::HashMap;

use super::*;

#[derive(Default)]
struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

#[test]
fn read_preference_is_light_in_non_hydrate_tests() {
    assert_eq!(read_preference(), ThemePreference::Light);
}

#[test]
fn empty_store_reads_light() {
    let store = MemoryStore::default();
    assert_eq!(read_preference_from(&store), ThemePreference::Light);
}

#[test]
fn persisted_value_is_read_back() {
    let store = MemoryStore::default();
    persist_in(&store, ThemePreference::Dark);
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("dark"));
    assert_eq!(read_preference_from(&store), ThemePreference::Dark);
}

#[test]
fn garbage_in_store_reads_light() {
    let store = MemoryStore::default();
    store.set(STORAGE_KEY, "sepia");
    assert_eq!(read_preference_from(&store), ThemePreference::Light);
}

#[test]
fn toggle_twice_restores_persisted_value() {
    let store = MemoryStore::default();
    persist_in(&store, ThemePreference::Light);

    let first = toggle_in(&store, read_preference_from(&store));
    assert_eq!(first, ThemePreference::Dark);
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("dark"));

    let second = toggle_in(&store, first);
    assert_eq!(second, ThemePreference::Light);
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn toggle_writes_even_when_nothing_was_stored() {
    let store = MemoryStore::default();
    assert_eq!(toggle_in(&store, ThemePreference::default()), ThemePreference::Dark);
    assert_eq!(read_preference_from(&store), ThemePreference::Dark);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(ThemePreference::Light);
    apply(ThemePreference::Dark);
}

#[test]
fn browser_toggle_flips_without_storage() {
    assert_eq!(toggle(ThemePreference::Light), ThemePreference::Dark);
    assert_eq!(toggle(ThemePreference::Dark), ThemePreference::Light);
}
