// web_app/mod.rs - Root module for the Leptos storefront
//
// Architecture:
// - model/: Catalog data types and price/category helpers (everywhere)
// - config.rs: Catalog base URL (everywhere)
// - api/: Catalog HTTP client and its errors (everywhere; wasm + native)
// - store/: Explicit state containers and their operations (everywhere)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod api;
pub mod config;
pub mod model;
pub mod store;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
