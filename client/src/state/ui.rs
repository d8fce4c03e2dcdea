//! Local UI chrome state (theme, collapsed mobile menu).
//!
//! DESIGN
//! ======
//! Keeps page-wide presentation flags out of the widget states (`contact`,
//! `nav`, `reveal`) so each widget reads only what it renders.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::theme::ThemePreference;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: ThemePreference,
    pub menu_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Collapse the mobile menu. Returns whether it was open.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }
}
