//! Theme store: the saved `ThemePreference` and the `<body>` class it drives.
//!
//! DESIGN
//! ======
//! The `*_from`/`*_in` functions take any `KeyValueStore`, so the
//! read/toggle/persist sequence is testable against an in-memory map. The
//! plain wrappers bind them to `BrowserStorage`. `apply` is the only place
//! that touches the document.
//!
//! TRADE-OFFS
//! ==========
//! The server cannot see the saved value, so it always renders light and
//! `app::App` re-applies the stored theme after hydration.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::ThemePreference;
use crate::util::storage::{BrowserStorage, KeyValueStore};

pub const STORAGE_KEY: &str = "theme";
const BODY_CLASS: &str = "dark-mode";

/// Read the stored preference, defaulting to light when absent or unreadable.
pub fn read_preference_from(store: &impl KeyValueStore) -> ThemePreference {
    ThemePreference::from_stored(store.get(STORAGE_KEY).as_deref())
}

/// Persist `pref`. Writing the same value twice is harmless.
pub fn persist_in(store: &impl KeyValueStore, pref: ThemePreference) {
    store.set(STORAGE_KEY, pref.as_str());
}

/// Flip `current`, apply it to the document, and persist it.
pub fn toggle_in(store: &impl KeyValueStore, current: ThemePreference) -> ThemePreference {
    let next = current.toggled();
    apply(next);
    persist_in(store, next);
    next
}

/// Saved preference for this origin.
pub fn read_preference() -> ThemePreference {
    read_preference_from(&BrowserStorage)
}

/// Flip the page theme and remember the choice for the next visit.
pub fn toggle(current: ThemePreference) -> ThemePreference {
    toggle_in(&BrowserStorage, current)
}

/// Add or remove the `.dark-mode` class on `<body>`.
pub fn apply(pref: ThemePreference) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            leptos::logging::warn!("dark mode: document body unavailable");
            return;
        };
        let _ = body.class_list().toggle_with_force(BODY_CLASS, pref.is_dark());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (pref, BODY_CLASS);
    }
}
