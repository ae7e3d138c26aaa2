// tests/filter_tests.rs - Search filter behaviour
//
// The filter is a case-insensitive title substring match over the
// currently loaded list, triggered explicitly.

use fakestore::fixtures::{products_in, sample_products};
use fakestore::web_app::model::CategorySelection;
use fakestore::web_app::store::{filter_by_title, Storefront};

fn loaded_store() -> Storefront {
    let mut store = Storefront::new();
    let request = store.begin_product_load(CategorySelection::All);
    store.finish_product_load(request, Ok(sample_products()));
    store
}

#[test]
fn test_empty_search_returns_full_list_in_order() {
    let mut store = loaded_store();
    let shown = store.search("");
    assert_eq!(shown, sample_products().len());
    assert_eq!(store.displayed_products(), sample_products().as_slice());
}

#[test]
fn test_search_without_match_is_empty() {
    let mut store = loaded_store();
    assert_eq!(store.search("no such thing"), 0);
    assert!(store.filter().is_empty());
}

#[test]
fn test_search_mixed_case() {
    let mut store = loaded_store();
    store.search("wOmEn'S");
    let titles: Vec<&str> = store
        .displayed_products()
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(
        titles,
        [
            "John Hardy Women's Legends Naga Gold & Silver Dragon Station Chain Bracelet",
            "MBJ Women's Solid Short Sleeve Boat Neck V",
            "Opna Women's Short Sleeve Moisture",
        ]
    );
}

#[test]
fn test_search_runs_over_loaded_list_not_previous_result() {
    let mut store = loaded_store();
    store.search("monitor");
    assert_eq!(store.displayed_products().len(), 1);

    // A broader search starts again from the loaded list
    store.search("s");
    let expected = filter_by_title(&sample_products(), "s");
    assert_eq!(store.displayed_products(), expected.as_slice());
}

#[test]
fn test_displayed_is_subset_of_loaded() {
    let mut store = loaded_store();
    for text in ["", "short", "USB", "xyz", "a"] {
        store.search(text);
        for product in store.displayed_products() {
            assert!(store.catalog().products().contains(product), "{} after '{}'", product.title, text);
        }
    }
}

#[test]
fn test_search_within_category() {
    let mut store = Storefront::new();
    let request = store.begin_product_load(CategorySelection::Named("electronics".to_string()));
    store.finish_product_load(request, Ok(products_in("electronics")));

    // "sleeve" matches women's clothing, which is not loaded
    assert_eq!(store.search("sleeve"), 0);
    assert_eq!(store.search("drive"), 1);
}
