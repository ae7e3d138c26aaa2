// web_app/model/mod.rs - Shared data models for client and server
//
// These structs mirror the catalog API's JSON payloads and are used
// throughout the application for type-safe rendering and cart math.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Raw value of the synthetic "no filter" category
pub const ALL_CATEGORIES: &str = "all";

/// Product as returned by the catalog API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub rating: Option<Rating>,
}

/// Customer rating attached to a product (decoded, not rendered)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// Category chosen in the category selector
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategorySelection {
    #[default]
    All,
    Named(String),
}

impl CategorySelection {
    /// Parse the raw `<option>` value of the category selector.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Named(value.to_string())
        }
    }

    /// Raw value used for filtering and as the `<option>` value.
    pub fn value(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Named(name) => name,
        }
    }
}

impl std::fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", category_label(self.value()))
    }
}

/// Category options in selector order: "all" first, then the API's order.
///
/// Each value appears once; a fetched "all" is the synthetic one.
pub fn category_options(fetched: Vec<String>) -> Vec<String> {
    let mut options = Vec::with_capacity(fetched.len() + 1);
    options.push(ALL_CATEGORIES.to_string());
    for category in fetched {
        if !options.contains(&category) {
            options.push(category);
        }
    }
    options
}

/// Display label for a raw category value
pub fn category_label(value: &str) -> String {
    value.to_uppercase()
}

/// Format a price with exactly two decimals, rounding half away from zero.
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}
