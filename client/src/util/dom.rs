//! Thin web-sys wrappers for measurements and scrolling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydrate-only. Components call these from event handlers and feed the
//! numbers into `util::section_math`; every failure comes back as a
//! `DomError` for the caller to log.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

use crate::error::DomError;
use crate::util::section_math::SectionBounds;

pub const NAVBAR_ID: &str = "navbar";

fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

fn document() -> Result<web_sys::Document, DomError> {
    window()?.document().ok_or(DomError::NoWindow)
}

/// Look up an element by id. `what` names it in the error.
pub fn html_element_by_id(id: &str, what: &'static str) -> Result<HtmlElement, DomError> {
    document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(DomError::MissingElement(what))
}

/// Current vertical scroll offset of the window.
pub fn scroll_y() -> Result<f64, DomError> {
    Ok(window()?.scroll_y()?)
}

/// Rendered height of the fixed navbar.
pub fn navbar_height() -> Result<f64, DomError> {
    let navbar = html_element_by_id(NAVBAR_ID, "navbar")?;
    Ok(f64::from(navbar.offset_height()))
}

/// Layout boxes of every `section[id]` in document order.
pub fn section_bounds() -> Result<Vec<SectionBounds>, DomError> {
    let nodes = document()?.query_selector_all("section[id]")?;
    let mut sections = Vec::new();
    for index in 0..nodes.length() {
        let Some(section) = nodes.item(index).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        sections.push(SectionBounds::new(
            section.id(),
            f64::from(section.offset_top()),
            f64::from(section.offset_height()),
        ));
    }
    Ok(sections)
}

/// Document offset of the section with `id`, if it exists.
pub fn section_offset_top(id: &str) -> Result<Option<f64>, DomError> {
    Ok(document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| f64::from(el.offset_top())))
}

pub fn scroll_to_smooth(top: f64) -> Result<(), DomError> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn scroll_into_view(element: &HtmlElement, block: ScrollLogicalPosition) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn alert(message: &str) -> Result<(), DomError> {
    window()?.alert_with_message(message)?;
    Ok(())
}
