//! Move keyboard focus to a form control by DOM id.
//!
//! Requires a browser environment; SSR and native tests no-op.

#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

/// Focus the element with `id`. Returns `true` when an element was focused.
pub fn focus_element(id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            log::warn!("focus target #{id} not found");
            return false;
        };
        element.focus().is_ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}
