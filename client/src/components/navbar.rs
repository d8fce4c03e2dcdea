//! Fixed top navbar: brand, section links, mobile collapse, theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `NavState` (kept current by the scroll watcher installed in
//! `pages::home`) for the shadow and the active link, and `UiState` for the
//! theme icon and the collapsed menu.

use leptos::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::content::SectionLink;
use crate::state::nav::NavState;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::section_math::navbar_shadow;

#[component]
pub fn Navbar(#[prop(into)] brand: String, sections: Vec<SectionLink>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let nav = expect_context::<RwSignal<NavState>>();

    let shadow = move || navbar_shadow(nav.with(|n| n.elevated));
    let menu_open = move || ui.with(|u| u.menu_open);

    view! {
        <nav id="navbar" class="navbar" style:box-shadow=shadow>
            <div class="container navbar__inner">
                <AnchorLink href="#home" class="navbar-brand">
                    {brand}
                </AnchorLink>
                <button
                    class="navbar-toggler"
                    type="button"
                    aria-controls="navbarNav"
                    aria-expanded=move || menu_open().to_string()
                    aria-label="Toggle navigation"
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    <span class="navbar-toggler-icon"></span>
                </button>
                <div id="navbarNav" class="navbar-collapse" class:show=menu_open>
                    <ul class="navbar-nav">
                        {sections
                            .into_iter()
                            .map(|link| {
                                let href = link.href();
                                let SectionLink { id, label } = link;
                                let active = Signal::derive(move || nav.with(|n| n.is_active(&id)));
                                view! {
                                    <li class="nav-item">
                                        <AnchorLink href=href class="nav-link" active=active>
                                            {label}
                                        </AnchorLink>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <ThemeToggle/>
                </div>
            </div>
        </nav>
    }
}

/// Moon/sun button that flips and persists the colour scheme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        let next = dark_mode::toggle(ui.with_untracked(|u| u.theme));
        ui.update(|u| u.theme = next);
    };

    view! {
        <button id="themeToggle" class="theme-toggle" type="button" aria-label="Toggle dark mode" on:click=on_click>
            <i id="themeIcon" class=move || ui.with(|u| u.theme.icon_class())></i>
        </button>
    }
}
