//! Browser glue errors.
//!
//! SYSTEM CONTEXT
//! ==============
//! DOM helpers return `DomError` so callers can log and move on. No error in
//! this crate is fatal: a widget whose element or browser API is missing is
//! simply not wired up, and the rest of the page stays interactive.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomError {
    /// Expected element (by id or node ref) is not in the document.
    #[error("missing element: {0}")]
    MissingElement(&'static str),

    /// `window` or `document` is unavailable (non-browser environment).
    #[error("browser environment unavailable")]
    NoWindow,

    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
