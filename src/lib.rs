// lib.rs - Root module for the fakestore library
//
// The same crate builds the server (feature "ssr") and the browser bundle
// (feature "hydrate"); the state and catalog modules compile for both.

/// Reusable catalog data for tests
pub mod fixtures;

/// The storefront web application
pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// Browser entry point: attach to the server-rendered markup
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
