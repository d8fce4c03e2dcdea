//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability. `dom` and `observer` are pure
//! web-sys glue and only exist in hydrate builds.

pub mod dark_mode;
#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod observer;
pub mod section_math;
pub mod storage;
pub mod validation;
