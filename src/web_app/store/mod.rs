// web_app/store/mod.rs - Explicit storefront state containers
//
// All mutable view state lives here, split by concern:
// - catalog.rs: loaded categories/products and request tickets
// - filter.rs: search text, selected category, displayed subset
// - cart.rs: session cart and cart-panel visibility
//
// `Storefront` aggregates them and is the only place they are mutated,
// through load / search / add_to_cart / toggle_cart. It knows nothing about
// Leptos or HTTP, so every rule can be exercised in plain unit tests.

pub mod cart;
pub mod catalog;
pub mod filter;

pub use cart::{CartEntry, CartPanel, CartState};
pub use catalog::{CatalogState, RequestTicket};
pub use filter::{filter_by_title, FilterState};

use rust_decimal::Decimal;

use crate::web_app::api::CatalogError;
use crate::web_app::model::{CategorySelection, Product};

/// A product fetch that has been started but not yet applied
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductRequest {
    pub ticket: RequestTicket,
    pub selection: CategorySelection,
}

/// What happened to a catalog response
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// State was replaced with `count` items.
    Applied { count: usize },
    /// A newer request was issued; the response was dropped.
    Stale,
    /// The request failed; state is unchanged.
    Failed,
}

#[derive(Clone, Debug, Default)]
pub struct Storefront {
    catalog: CatalogState,
    filter: FilterState,
    cart: CartState,
    cart_panel: CartPanel,
}

impl Storefront {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn cart_panel(&self) -> CartPanel {
        self.cart_panel
    }

    pub fn displayed_products(&self) -> &[Product] {
        self.filter.displayed()
    }

    /// Apply the result of the category list fetch.
    pub fn load_categories(&mut self, result: Result<Vec<String>, CatalogError>) -> LoadOutcome {
        match result {
            Ok(fetched) => {
                self.catalog.set_categories(fetched);
                let count = self.catalog.categories().len();
                tracing::debug!("Loaded {} category options", count);
                LoadOutcome::Applied { count }
            }
            Err(e) => {
                tracing::warn!("Category load failed, keeping previous list: {}", e);
                LoadOutcome::Failed
            }
        }
    }

    /// Start a product fetch for `selection`. The returned ticket supersedes
    /// every request issued before it. Nothing else changes until the
    /// response is applied.
    pub fn begin_product_load(&mut self, selection: CategorySelection) -> ProductRequest {
        let ticket = self.catalog.issue_ticket();
        tracing::debug!("Product request #{} for category '{}'", ticket.value(), selection.value());
        ProductRequest { ticket, selection }
    }

    /// Apply a product fetch result. On success the selected category, the
    /// loaded list and the displayed set are replaced; the previous search is
    /// not reapplied.
    pub fn finish_product_load(
        &mut self,
        request: ProductRequest,
        result: Result<Vec<Product>, CatalogError>,
    ) -> LoadOutcome {
        let ProductRequest { ticket, selection } = request;
        let products = match result {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!("Product request #{} failed, keeping previous list: {}", ticket.value(), e);
                return LoadOutcome::Failed;
            }
        };

        let (products, rejected): (Vec<Product>, Vec<Product>) = products
            .into_iter()
            .partition(|product| product.price >= Decimal::ZERO);
        if !rejected.is_empty() {
            tracing::warn!("Dropped {} products with a negative price", rejected.len());
        }

        if !self.catalog.replace_products(ticket, products) {
            tracing::debug!("Discarding stale product response #{}", ticket.value());
            return LoadOutcome::Stale;
        }

        self.filter.select_category(selection);
        self.filter.reset_to(self.catalog.products());
        LoadOutcome::Applied {
            count: self.catalog.products().len(),
        }
    }

    /// Filter the loaded products by title. Returns the displayed count.
    pub fn search(&mut self, text: &str) -> usize {
        self.filter.apply_search(self.catalog.products(), text);
        self.filter.displayed().len()
    }

    /// Append `product` to the cart. Returns the new cart count.
    pub fn add_to_cart(&mut self, product: Product) -> usize {
        let entry = self.cart.add(product);
        tracing::debug!("Added product {} to cart", entry.product.id);
        self.cart.count()
    }

    pub fn toggle_cart(&mut self) -> CartPanel {
        self.cart_panel.toggle();
        self.cart_panel
    }
}
