//! Resume download control.

#[cfg(test)]
#[path = "resume_button_test.rs"]
mod resume_button_test;

use leptos::prelude::*;

pub const RESUME_PLACEHOLDER_MESSAGE: &str =
    "Resume download functionality - Replace this with your actual resume file link!";

/// Whether `href` is a stand-in rather than a real resume file.
pub fn is_placeholder_href(href: Option<&str>) -> bool {
    href.map(str::trim).is_none_or(|h| h.is_empty() || h == "#")
}

/// Download button. Until a real file is configured it intercepts the click
/// and shows a reminder instead of navigating.
#[component]
pub fn ResumeButton(#[prop(optional)] href: Option<String>) -> impl IntoView {
    let placeholder = is_placeholder_href(href.as_deref());
    let href = href.unwrap_or_else(|| "#".to_owned());

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if !placeholder {
            return;
        }
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            if let Err(e) = crate::util::dom::alert(RESUME_PLACEHOLDER_MESSAGE) {
                leptos::logging::warn!("resume placeholder alert failed: {e}");
            }
        }
    };

    view! {
        <a id="downloadResume" href=href class="btn btn-outline" download=!placeholder on:click=on_click>
            <i class="fas fa-download"></i>
            " Download Resume"
        </a>
    }
}
