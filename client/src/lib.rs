//! # client
//!
//! Leptos + WASM frontend for the student organization site: a landing page
//! with a scroll-revealed hero banner and a validated registration form.
//!
//! Form and animation rules live in `state` and `util` as plain Rust so they
//! can be tested natively; `components` and `pages` bind them to the DOM.

pub mod app;
pub mod components;
pub mod consts;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
