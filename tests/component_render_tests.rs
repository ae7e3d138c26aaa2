// Component render tests
// These tests verify that components can be constructed inside a reactive
// owner and render to HTML on the server.

use fakestore::fixtures::{product, sample_products};
use fakestore::web_app::components::*;
use fakestore::web_app::model::{category_options, CategorySelection, Product};
use fakestore::web_app::store::CartEntry;
use leptos::prelude::*;
use rust_decimal::Decimal;

// Helper to create a runtime for tests
fn with_runtime<F>(f: F)
where
    F: FnOnce(),
{
    let owner = Owner::new();
    owner.with(f);
}

#[test]
fn test_price_display_renders_two_decimals() {
    with_runtime(|| {
        let html = view! { <PriceDisplay price=Decimal::new(355, 1) /> }.to_html();
        assert!(html.contains("$35.50"), "{}", html);

        let html = view! { <PriceDisplay price=Decimal::new(10, 0) highlight=true /> }.to_html();
        assert!(html.contains("$10.00"), "{}", html);
        assert!(html.contains("text-green-600"));
    });
}

#[test]
fn test_empty_state_renders_message() {
    with_runtime(|| {
        let html = view! { <EmptyState /> }.to_html();
        assert!(html.contains(NO_PRODUCTS_MESSAGE));
    });
}

#[test]
fn test_product_card_renders_title_image_and_price() {
    with_runtime(|| {
        let item = product(9, "WD 2TB Elements Portable External Hard Drive", "64", "electronics");
        let on_add = Callback::new(|_product: Product| {});
        let html = view! { <ProductCard product=item on_add=on_add /> }.to_html();

        assert!(html.contains("WD 2TB Elements Portable External Hard Drive"));
        assert!(html.contains("https://fakestoreapi.com/img/9.jpg"));
        assert!(html.contains("$64.00"));
        assert!(html.contains("Add to Cart"));
    });
}

#[test]
fn test_footer_renders_static_content() {
    with_runtime(|| {
        let html = view! { <StoreFooter /> }.to_html();
        assert!(html.contains("support@fakestore.com"));
        assert!(html.contains("All rights reserved."));
        for (network, url) in SOCIAL_LINKS {
            assert!(html.contains(network));
            assert!(html.contains(url));
        }
    });
}

#[test]
fn test_empty_product_grid_shows_message() {
    with_runtime(|| {
        let products = Signal::derive(Vec::<Product>::new);
        let on_add = Callback::new(|_product: Product| {});
        let html = view! { <ProductGrid products=products on_add=on_add /> }.to_html();

        assert!(html.contains(NO_PRODUCTS_MESSAGE), "{}", html);
        assert!(!html.contains("Add to Cart"));
    });
}

#[test]
fn test_product_grid_renders_every_displayed_product() {
    with_runtime(|| {
        let products = Signal::derive(sample_products);
        let on_add = Callback::new(|_product: Product| {});
        let html = view! { <ProductGrid products=products on_add=on_add /> }.to_html();

        assert!(!html.contains(NO_PRODUCTS_MESSAGE));
        assert_eq!(html.matches("Add to Cart").count(), sample_products().len());
    });
}

#[test]
fn test_empty_cart_overlay_shows_message() {
    with_runtime(|| {
        let entries = Signal::derive(Vec::<CartEntry>::new);
        let total = Signal::derive(|| "0.00".to_string());
        let on_close = Callback::new(|_: ()| {});
        let html = view! { <CartOverlay entries=entries total=total on_close=on_close /> }.to_html();

        assert!(html.contains(EMPTY_CART_MESSAGE), "{}", html);
        assert!(html.contains("Close Cart"));
        assert!(!html.contains("Total:"));
    });
}

#[test]
fn test_cart_overlay_lists_duplicates_and_total() {
    with_runtime(|| {
        let mug = product(7, "Enamel Mug", "4.50", "misc");
        let entries = Signal::derive(move || {
            vec![CartEntry::from_product(mug.clone()), CartEntry::from_product(mug.clone())]
        });
        let total = Signal::derive(|| "9.00".to_string());
        let on_close = Callback::new(|_: ()| {});
        let html = view! { <CartOverlay entries=entries total=total on_close=on_close /> }.to_html();

        assert_eq!(html.matches(r#"alt="Enamel Mug""#).count(), 2, "{}", html);
        assert_eq!(html.matches("$4.50").count(), 2);
        assert!(html.contains("Total: $9.00"));
        assert!(!html.contains(EMPTY_CART_MESSAGE));
    });
}

#[test]
fn test_category_select_lists_all_first_and_once() {
    with_runtime(|| {
        let fetched = ["jewelery", "all", "electronics"].map(String::from).to_vec();
        let categories = Signal::derive(move || category_options(fetched.clone()));
        let selected = Signal::derive(|| CategorySelection::All);
        let on_change = Callback::new(|_selection: CategorySelection| {});
        let html = view! {
            <CategorySelect categories=categories selected=selected on_change=on_change />
        }
        .to_html();

        assert!(html.contains("Select Category"));
        assert_eq!(html.matches(r#"value="all""#).count(), 1, "{}", html);

        let all = html.find(r#"value="all""#).expect("all option");
        let jewelery = html.find(r#"value="jewelery""#).expect("jewelery option");
        let electronics = html.find(r#"value="electronics""#).expect("electronics option");
        assert!(all < jewelery && jewelery < electronics);
        assert!(html.contains("ALL"));
        assert!(html.contains("JEWELERY"));
    });
}

#[test]
fn test_overlay_renders_title_and_children() {
    with_runtime(|| {
        let on_close = Callback::new(|_: ()| {});
        let html = view! {
            <Overlay title="Your Cart" on_close=on_close>
                <p>"Inside the panel"</p>
            </Overlay>
        }
        .to_html();

        assert!(html.contains("Your Cart"));
        assert!(html.contains("Inside the panel"));
    });
}
