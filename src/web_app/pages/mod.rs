// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - StorefrontPage: Product grid, search, categories, and cart

pub mod storefront;

// Re-export page components
pub use storefront::StorefrontPage;
