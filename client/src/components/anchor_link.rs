//! In-page link that scrolls smoothly to its section under the fixed navbar.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::section_math::anchor_target;

/// `<a href="#id">` with smooth scrolling.
///
/// `href="#"` and links whose target section is missing keep the browser's
/// default behaviour. A successful jump also collapses the mobile menu.
#[component]
pub fn AnchorLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] active: Option<Signal<bool>>,
    children: Children,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let target = href.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| scroll_to_anchor(&ev, &target, ui);
    let is_active = move || active.is_some_and(|a| a.get());

    view! {
        <a href=href class=class class:active=is_active on:click=on_click>
            {children()}
        </a>
    }
}

fn scroll_to_anchor(ev: &leptos::ev::MouseEvent, href: &str, ui: RwSignal<UiState>) {
    let Some(id) = anchor_target(href) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        use crate::util::dom;
        use crate::util::section_math::scroll_target;

        let offset_top = match dom::section_offset_top(id) {
            Ok(Some(top)) => top,
            Ok(None) => return,
            Err(e) => {
                leptos::logging::warn!("anchor #{id}: {e}");
                return;
            }
        };
        ev.prevent_default();

        let navbar_height = dom::navbar_height().unwrap_or(0.0);
        if let Err(e) = dom::scroll_to_smooth(scroll_target(offset_top, navbar_height)) {
            leptos::logging::warn!("smooth scroll to #{id} failed: {e}");
        }
        ui.update(|u| {
            u.close_menu();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ev, id, ui);
    }
}
