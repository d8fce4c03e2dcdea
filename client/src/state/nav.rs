//! Scroll-derived navbar state: elevation and the active section link.
//!
//! DESIGN
//! ======
//! Recomputed from fresh measurements on every scroll/resize tick. When the
//! viewport sits outside every section range the previous active section is
//! kept, so the last visited link stays highlighted above the first section
//! boundary and below the last one.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::util::section_math::{SectionBounds, active_section, is_elevated};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub active_section: Option<String>,
    pub elevated: bool,
}

impl NavState {
    /// Fold one scroll tick into the state.
    pub fn apply_scroll(&mut self, scroll_y: f64, navbar_height: f64, sections: &[SectionBounds]) {
        self.elevated = is_elevated(scroll_y);
        if let Some(id) = active_section(scroll_y, navbar_height, sections) {
            if self.active_section.as_deref() != Some(id) {
                self.active_section = Some(id.to_owned());
            }
        }
    }

    /// Whether the nav link pointing at `section_id` carries `.active`.
    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_section.as_deref() == Some(section_id)
    }
}
