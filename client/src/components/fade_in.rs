//! Wrapper that fades its children in the first time they scroll into view.

use leptos::prelude::*;

use crate::state::reveal::RevealLatch;

/// Renders `.fade-in` and adds `.visible` once, on first intersection.
#[component]
pub fn FadeIn(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let latch = RwSignal::new(RevealLatch::default());
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::state::reveal::FADE_IN;
        use crate::util::observer::observe_once;

        let installed = RwSignal::new(false);
        Effect::new(move || {
            if installed.get_untracked() {
                return;
            }
            let Some(element) = node.get() else {
                return;
            };
            installed.set(true);
            let fire = move || {
                latch.update(|l| {
                    l.fire();
                });
            };
            if let Err(e) = observe_once(&element, FADE_IN, fire) {
                leptos::logging::warn!("fade-in observer not installed: {e}");
            }
        });
    }

    let classes = if class.is_empty() { "fade-in".to_owned() } else { format!("fade-in {class}") };

    view! {
        <div node_ref=node class=classes class:visible=move || latch.get().is_fired()>
            {children()}
        </div>
    }
}
