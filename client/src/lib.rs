//! # client
//!
//! Leptos + WASM front-end for the storefront product catalog.
//!
//! This crate contains the catalog page, its card component, the browser
//! transport for the collection service, and the page state wiring. Action
//! rules live in the shared `catalog` crate; this crate only renders them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered catalog page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
