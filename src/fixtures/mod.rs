// fixtures/mod.rs - Test fixtures module
//
// Reusable catalog data shaped like the Fake Store API responses.
// Unit tests, integration tests, and the in-process catalog server used by
// the client tests all draw from here so they agree on the same products.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::web_app::model::{Product, Rating};

/// Build a product with the fields the storefront renders.
///
/// `price` is a decimal literal such as `"109.95"`; it must be valid.
pub fn product(id: u32, title: &str, price: &str, category: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        price: Decimal::from_str(price).unwrap_or_else(|e| panic!("bad fixture price {price}: {e}")),
        description: format!("{title} description"),
        category: category.to_string(),
        image: format!("https://fakestoreapi.com/img/{id}.jpg"),
        rating: Some(Rating { rate: 4.0, count: 10 }),
    }
}

/// Category labels in the order the API returns them
pub fn sample_categories() -> Vec<String> {
    ["electronics", "jewelery", "men's clothing", "women's clothing"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// The full (unscoped) product list
pub fn sample_products() -> Vec<Product> {
    vec![
        product(1, "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops", "109.95", "men's clothing"),
        product(2, "Mens Casual Premium Slim Fit T-Shirts", "22.30", "men's clothing"),
        product(5, "John Hardy Women's Legends Naga Gold & Silver Dragon Station Chain Bracelet", "695", "jewelery"),
        product(9, "WD 2TB Elements Portable External Hard Drive - USB 3.0", "64", "electronics"),
        product(14, "Samsung 49-Inch CHG90 144Hz Curved Gaming Monitor", "999.99", "electronics"),
        product(18, "MBJ Women's Solid Short Sleeve Boat Neck V", "9.85", "women's clothing"),
        product(19, "Opna Women's Short Sleeve Moisture", "7.95", "women's clothing"),
    ]
}

/// Products of one category, as `/products/category/{name}` returns them
pub fn products_in(category: &str) -> Vec<Product> {
    sample_products()
        .into_iter()
        .filter(|p| p.category == category)
        .collect()
}
