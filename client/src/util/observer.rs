//! One-shot `IntersectionObserver` glue.
//!
//! Each call creates an observer for a single element. The first
//! intersecting entry runs the callback, then the observer unobserves the
//! element and disconnects, so the callback runs at most once. Hydrate-only.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::DomError;
use crate::state::reveal::RevealOptions;

/// Run `on_enter` the first time `element` intersects the viewport.
pub fn observe_once<F>(element: &Element, options: RevealOptions, on_enter: F) -> Result<(), DomError>
where
    F: FnOnce() + 'static,
{
    let mut on_enter = Some(on_enter);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                observer.unobserve(&entry.target());
                observer.disconnect();
                if let Some(run) = on_enter.take() {
                    run();
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);

    // Lives as long as the page; the observer disconnects itself after firing.
    callback.forget();
    Ok(())
}
