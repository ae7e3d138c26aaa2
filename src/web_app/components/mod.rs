// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the storefront.
//
// Structure:
// - common.rs: Reusable atomic components (Button, PriceDisplay, Overlay)
// - search.rs: Search bar and category selector
// - product.rs: Product cards, grid, and empty state
// - cart.rs: Cart toggle button and cart overlay
// - layout.rs: Header and footer

pub mod cart;
pub mod common;
pub mod layout;
pub mod product;
pub mod search;

// Re-export commonly used components for convenience
pub use cart::*;
pub use common::*;
pub use layout::*;
pub use product::*;
pub use search::*;
