//! Contact form with blur/submit validation and a self-dismissing banner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submission is local only: an accepted form is cleared and acknowledged,
//! nothing leaves the browser. The field state machine lives in
//! `state::contact`; this component wires DOM events to it and performs the
//! scroll/focus side effects.

use leptos::prelude::*;

use crate::state::contact::{ContactFormState, FieldKind, SubmitOutcome};

pub const FORM_ID: &str = "contactForm";
pub const BANNER_ID: &str = "formSuccess";

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = expect_context::<RwSignal<ContactFormState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(outcome) = form.try_update(ContactFormState::submit) else {
            return;
        };
        match outcome {
            SubmitOutcome::Accepted { banner_seq } => {
                leptos::logging::log!("contact form accepted locally (seq {banner_seq}); nothing was sent");
                #[cfg(feature = "hydrate")]
                show_banner(form, banner_seq);
            }
            SubmitOutcome::Rejected { first_invalid } => {
                #[cfg(feature = "hydrate")]
                focus_field(first_invalid);
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = first_invalid;
                }
            }
        }
    };

    view! {
        <form id=FORM_ID class="contact-form" novalidate=true on:submit=on_submit>
            <ContactField kind=FieldKind::Name/>
            <ContactField kind=FieldKind::Email/>
            <ContactField kind=FieldKind::Message/>
            <button type="submit" class="btn btn-primary">
                "Send Message"
            </button>
            <div
                id=BANNER_ID
                class="alert alert-success"
                class:d-none=move || !form.with(|f| f.banner_visible)
                role="status"
            >
                "Thank you! Your message has been received."
            </div>
        </form>
    }
}

/// One labelled input with its inline error slot.
#[component]
fn ContactField(kind: FieldKind) -> impl IntoView {
    let form = expect_context::<RwSignal<ContactFormState>>();

    let value = move || form.with(|f| f.field(kind).value.clone());
    let invalid = move || form.with(|f| f.field(kind).is_invalid());
    let error = move || form.with(|f| f.error_text(kind).unwrap_or_default());
    let set_value = move |text: String| form.update(|f| f.set_value(kind, text));
    let check = move || {
        form.update(|f| {
            f.blur(kind);
        });
    };

    let control = if kind == FieldKind::Message {
        view! {
            <textarea
                id=kind.input_id()
                name=kind.input_id()
                class="form-control"
                class:is-invalid=invalid
                rows="5"
                prop:value=value
                on:input=move |ev| set_value(event_target_value(&ev))
                on:blur=move |_| check()
            ></textarea>
        }
        .into_any()
    } else {
        let input_type = if kind == FieldKind::Email { "email" } else { "text" };
        view! {
            <input
                id=kind.input_id()
                name=kind.input_id()
                type=input_type
                class="form-control"
                class:is-invalid=invalid
                prop:value=value
                on:input=move |ev| set_value(event_target_value(&ev))
                on:blur=move |_| check()
            />
        }
        .into_any()
    };

    view! {
        <div class="form-field">
            <label for=kind.input_id() class="form-label">
                {kind.label()}
            </label>
            {control}
            <div id=kind.error_id() class="invalid-feedback">
                {error}
            </div>
        </div>
    }
}

/// Scroll the banner into view and schedule its dismissal.
#[cfg(feature = "hydrate")]
fn show_banner(form: RwSignal<ContactFormState>, banner_seq: u64) {
    use gloo_timers::callback::Timeout;
    use web_sys::ScrollLogicalPosition;

    use crate::state::contact::BANNER_DISMISS_MS;
    use crate::util::dom;

    // Wait a tick so the banner is no longer `display: none` when scrolled to.
    Timeout::new(0, move || match dom::html_element_by_id(BANNER_ID, "success banner") {
        Ok(banner) => dom::scroll_into_view(&banner, ScrollLogicalPosition::Nearest),
        Err(e) => leptos::logging::warn!("{e}"),
    })
    .forget();

    Timeout::new(BANNER_DISMISS_MS, move || {
        form.update(|f| {
            f.hide_banner(banner_seq);
        });
    })
    .forget();
}

/// Center the first invalid input and move focus to it.
#[cfg(feature = "hydrate")]
fn focus_field(kind: FieldKind) {
    use web_sys::ScrollLogicalPosition;

    use crate::util::dom;

    match dom::html_element_by_id(kind.input_id(), "contact form input") {
        Ok(input) => {
            dom::scroll_into_view(&input, ScrollLogicalPosition::Center);
            if input.focus().is_err() {
                leptos::logging::warn!("could not focus #{}", kind.input_id());
            }
        }
        Err(e) => leptos::logging::warn!("{e}"),
    }
}
