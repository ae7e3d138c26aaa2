// web_app/store/filter.rs - Category + search filtering
//
// The displayed set is derived from the loaded product list. A search
// narrows it; a category load replaces it wholesale with the new list.

use crate::web_app::model::{CategorySelection, Product};

/// Products whose title contains `search`, ignoring case. Order is kept.
///
/// An empty search matches everything.
pub fn filter_by_title(products: &[Product], search: &str) -> Vec<Product> {
    let needle = search.to_lowercase();
    products
        .iter()
        .filter(|product| product.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct FilterState {
    search_text: String,
    category: CategorySelection,
    displayed: Vec<Product>,
}

impl FilterState {
    /// Last search text that was applied.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn category(&self) -> &CategorySelection {
        &self.category
    }

    pub fn displayed(&self) -> &[Product] {
        &self.displayed
    }

    pub fn is_empty(&self) -> bool {
        self.displayed.is_empty()
    }

    pub fn select_category(&mut self, category: CategorySelection) {
        self.category = category;
    }

    /// Narrow the displayed set to `products` matching `search`.
    pub fn apply_search(&mut self, products: &[Product], search: &str) {
        self.search_text = search.to_string();
        self.displayed = filter_by_title(products, search);
    }

    /// Show `products` unfiltered. Used after a category load; the previous
    /// search is not reapplied.
    pub fn reset_to(&mut self, products: &[Product]) {
        self.search_text.clear();
        self.displayed = products.to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_products;

    #[test]
    fn test_empty_search_matches_all_in_order() {
        let products = sample_products();
        let filtered = filter_by_title(&products, "");
        assert_eq!(filtered, products);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = sample_products();
        let lower = filter_by_title(&products, "backpack");
        let upper = filter_by_title(&products, "BACKPACK");
        assert_eq!(lower.len(), 1);
        assert_eq!(lower, upper);
        assert!(lower[0].title.contains("Backpack"));
    }

    #[test]
    fn test_search_without_match() {
        let products = sample_products();
        assert!(filter_by_title(&products, "zeppelin").is_empty());
    }

    #[test]
    fn test_search_matches_title_only() {
        // "electronics" is a category, not part of any title
        let products = sample_products();
        assert!(filter_by_title(&products, "electronics").is_empty());
    }

    #[test]
    fn test_apply_then_reset() {
        let products = sample_products();
        let mut state = FilterState::default();

        state.apply_search(&products, "shirt");
        assert_eq!(state.search_text(), "shirt");
        assert!(state.displayed().len() < products.len());

        state.reset_to(&products);
        assert_eq!(state.search_text(), "");
        assert_eq!(state.displayed(), products.as_slice());
    }
}
