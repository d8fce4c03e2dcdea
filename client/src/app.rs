//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::{contact::ContactFormState, nav::NavState, ui::UiState};

const FONT_AWESOME_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, restores the saved theme once
/// hydrated, and mounts the single page route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let nav = RwSignal::new(NavState::default());
    let contact = RwSignal::new(ContactFormState::default());

    provide_context(ui);
    provide_context(nav);
    provide_context(contact);

    // The server always renders light; correct it from localStorage on load.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let pref = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(pref);
        ui.update(|u| u.theme = pref);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Link rel="stylesheet" href=FONT_AWESOME_CSS/>
        <Meta name="description" content="Personal portfolio"/>
        <Title text="Portfolio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
