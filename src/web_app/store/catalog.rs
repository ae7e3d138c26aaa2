// web_app/store/catalog.rs - Loaded catalog state
//
// Holds the most recently applied category list and product list.
// Product loads are tagged with request tickets so that a slow response
// for an old category can never overwrite a newer one.

use crate::web_app::model::{category_options, Product};

/// Sequence number attached to a product request
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    categories: Vec<String>,
    products: Vec<Product>,
    latest_ticket: RequestTicket,
}

impl CatalogState {
    /// Category options as shown in the selector ("all" first). Empty until
    /// the category list has loaded.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The full product list for the active category.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn set_categories(&mut self, fetched: Vec<String>) {
        self.categories = category_options(fetched);
    }

    /// Issue the ticket for a new product request; it supersedes all earlier ones.
    pub fn issue_ticket(&mut self) -> RequestTicket {
        self.latest_ticket = RequestTicket(self.latest_ticket.0 + 1);
        self.latest_ticket
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket == self.latest_ticket
    }

    /// Replace the product list if `ticket` is still the newest request.
    ///
    /// Returns `false` (and leaves the list alone) for stale tickets.
    pub fn replace_products(&mut self, ticket: RequestTicket, products: Vec<Product>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.products = products;
        true
    }
}
