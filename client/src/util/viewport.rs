//! One-shot viewport visibility observation.
//!
//! Wraps `IntersectionObserver`: the callback runs the first time the element
//! intersects the viewport, after which the observer disconnects so the
//! callback never repeats. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! If the observer cannot be constructed the callback runs immediately, so
//! content is revealed without animation instead of staying hidden.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Fraction of the element that must be visible to count as "in view".
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Invoke `on_visible` once, when `element` first enters the viewport.
#[cfg(feature = "hydrate")]
pub fn observe_once(element: &web_sys::Element, on_visible: impl FnOnce() + 'static) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    let pending: Rc<RefCell<Option<Box<dyn FnOnce()>>>> = Rc::new(RefCell::new(Some(Box::new(on_visible))));
    let fire = {
        let pending = Rc::clone(&pending);
        move || {
            if let Some(callback) = pending.borrow_mut().take() {
                callback();
            }
        }
    };

    let on_entries = {
        let fire = fire.clone();
        Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let visible = entries
                    .iter()
                    .any(|entry| entry.unchecked_into::<web_sys::IntersectionObserverEntry>().is_intersecting());
                if visible {
                    observer.disconnect();
                    fire();
                }
            },
        )
    };

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    match web_sys::IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            // The observer owns the callback for the page lifetime.
            on_entries.forget();
        }
        Err(err) => {
            log::warn!("IntersectionObserver unavailable, revealing immediately: {err:?}");
            fire();
        }
    }
}

/// Non-browser builds never observe; content stays in its server-rendered state.
#[cfg(not(feature = "hydrate"))]
pub fn observe_once<E: ?Sized>(element: &E, on_visible: impl FnOnce() + 'static) {
    let _ = (element, on_visible);
}
