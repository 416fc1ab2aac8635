// lib.rs - Root module for the bookwise_explore library
//
// The library is shared by the server binary (ssr), the WASM bundle
// (hydrate) and the tests.

/// Sample catalog data for tests and demo mode
pub mod fixtures;

/// The Leptos application and the explore page logic
pub mod web_app;

/// WASM entry point: hydrate the server-rendered page
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
