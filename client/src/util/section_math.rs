//! Scroll-position arithmetic for the navbar and in-page navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `util::dom` takes the measurements (scroll offset, navbar height, section
//! boxes); everything here is a pure function of those numbers so the
//! highlighter and elevation rules can be tested without a layout engine.

#[cfg(test)]
#[path = "section_math_test.rs"]
mod section_math_test;

/// Scroll offset past which the navbar switches to the elevated shadow.
pub const NAVBAR_ELEVATION_THRESHOLD_PX: f64 = 50.0;

/// Extra lead before a section counts as active, on top of the navbar height.
pub const SECTION_ACTIVATION_LEAD_PX: f64 = 100.0;

pub const NAVBAR_SHADOW_ELEVATED: &str = "0 4px 20px rgba(0, 0, 0, 0.2)";
pub const NAVBAR_SHADOW_FLAT: &str = "0 2px 10px rgba(0, 0, 0, 0.1)";

/// Layout box of one `section[id]`, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, offset_top: f64, height: f64) -> Self {
        Self { id: id.into(), offset_top, height }
    }

    /// `(lower, upper]` scroll range in which this section is active.
    pub fn activation_range(&self, navbar_height: f64) -> (f64, f64) {
        let top = self.offset_top - navbar_height - SECTION_ACTIVATION_LEAD_PX;
        (top, top + self.height)
    }
}

pub fn is_elevated(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_ELEVATION_THRESHOLD_PX
}

pub fn navbar_shadow(elevated: bool) -> &'static str {
    if elevated { NAVBAR_SHADOW_ELEVATED } else { NAVBAR_SHADOW_FLAT }
}

/// Section whose half-open range `(top, top + height]` contains `scroll_y`.
///
/// Ranges of laid-out sections do not overlap; if they ever do, the last
/// match in document order wins.
pub fn active_section(scroll_y: f64, navbar_height: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .rfind(|section| {
            let (lower, upper) = section.activation_range(navbar_height);
            scroll_y > lower && scroll_y <= upper
        })
        .map(|section| section.id.as_str())
}

/// Scroll offset that puts a section's top just under the fixed navbar.
pub fn scroll_target(offset_top: f64, navbar_height: f64) -> f64 {
    offset_top - navbar_height
}

/// Section id referenced by an in-page link, or `None` for `"#"` and
/// anything that is not a fragment link.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}
