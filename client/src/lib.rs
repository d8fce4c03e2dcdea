//! # client
//!
//! Leptos + WASM frontend for the personal portfolio page.
//!
//! This crate renders the page (server-side under `ssr`, hydrated in the
//! browser under `hydrate`) and owns every interactive behaviour: theme
//! toggle, smooth in-page navigation, reveal animations, contact-form
//! validation, scroll-reactive navbar and active-link highlighting.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod content;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point invoked by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
