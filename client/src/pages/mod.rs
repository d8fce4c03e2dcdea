//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page. `home` owns page-wide orchestration (content
//! loading, the scroll watcher) and delegates rendering to `components`.

pub mod home;
