//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by widget (`contact`, `nav`, `reveal`, etc.) so individual
//! components can depend on small focused models. Page-wide signals are
//! created once in `app::App` and handed to components through context.

pub mod contact;
pub mod nav;
pub mod reveal;
pub mod theme;
pub mod ui;
