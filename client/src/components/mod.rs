//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page sections and interactive controls while
//! reading/writing shared state from Leptos context providers. Browser side
//! effects (observers, timers, scrolling) only run in `hydrate` builds.

pub mod anchor_link;
pub mod contact_form;
pub mod fade_in;
pub mod navbar;
pub mod resume_button;
pub mod skills;
