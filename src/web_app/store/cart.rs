// web_app/store/cart.rs - Session cart
//
// Append-only: entries are never removed or merged, and the cart only
// empties when the page is reloaded. Adding the same product twice yields
// two entries.

use chrono::{DateTime, Local, Utc};
use rust_decimal::Decimal;

use crate::web_app::model::{format_price, Product};

/// A product snapshot taken when it was added to the cart
#[derive(Clone, Debug, PartialEq)]
pub struct CartEntry {
    pub product: Product,
    pub added_at: DateTime<Utc>,
}

impl CartEntry {
    pub fn from_product(product: Product) -> Self {
        CartEntry {
            product,
            added_at: Utc::now(),
        }
    }

    pub fn price(&self) -> Decimal {
        self.product.price
    }

    /// Local wall-clock time of the add, as shown in the cart overlay
    pub fn added_time_label(&self) -> String {
        self.added_at.with_timezone(&Local).format("%H:%M").to_string()
    }
}

#[derive(Clone, Debug, Default)]
pub struct CartState {
    entries: Vec<CartEntry>,
}

impl CartState {
    /// Append a copy of `product` and return the new entry.
    pub fn add(&mut self, product: Product) -> &CartEntry {
        self.entries.push(CartEntry::from_product(product));
        &self.entries[self.entries.len() - 1]
    }

    /// Entries in the order they were added.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact sum of entry prices; rounding happens only in `total_display`.
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(CartEntry::price).sum()
    }

    pub fn total_display(&self) -> String {
        format_price(self.total())
    }
}

/// Visibility of the cart overlay
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CartPanel {
    #[default]
    Hidden,
    Shown,
}

impl CartPanel {
    pub fn toggle(&mut self) {
        *self = match self {
            CartPanel::Hidden => CartPanel::Shown,
            CartPanel::Shown => CartPanel::Hidden,
        };
    }

    pub fn is_shown(self) -> bool {
        self == CartPanel::Shown
    }
}
