// web_app/pages/storefront.rs - Storefront page component
//
// The single view of the app. It owns the `Storefront` state container and
// wires user events to its operations:
// - mount: load categories and the full product list
// - category change: re-fetch products for that category
// - search click: filter the loaded list by title
// - add to cart / cart toggle
//
// Fetches run with spawn_local and never block the UI. Each product fetch
// carries a ticket; late responses for superseded requests are dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::api::CatalogClient;
use crate::web_app::components::*;
use crate::web_app::config::StoreConfig;
use crate::web_app::model::{CategorySelection, Product};
use crate::web_app::store::Storefront;

/// Acknowledgement shown after each add-to-cart
pub const ADDED_TO_CART_MESSAGE: &str = "Product added successfully!";

/// Main storefront page component
#[component]
pub fn StorefrontPage() -> impl IntoView {
    let config = StoreConfig::from_build_env();
    let client = CatalogClient::new(config.api_base_url);

    let store = RwSignal::new(Storefront::new());
    // Uncommitted text in the search box
    let query = RwSignal::new(String::new());

    let load_categories = {
        let client = client.clone();
        move || {
            let client = client.clone();
            spawn_local(async move {
                let result = client.fetch_categories().await;
                store.update(|s| {
                    s.load_categories(result);
                });
            });
        }
    };

    let load_products = move |selection: CategorySelection| {
        let Some(request) = store.try_update(|s| s.begin_product_load(selection)) else {
            return;
        };
        let client = client.clone();
        spawn_local(async move {
            let result = client.fetch_products(&request.selection).await;
            store.update(|s| {
                s.finish_product_load(request, result);
            });
        });
    };

    // Initial load (browser only; effects do not run during SSR)
    Effect::new({
        let load_products = load_products.clone();
        move || {
            load_categories();
            load_products(CategorySelection::All);
        }
    });

    let on_category = Callback::new(move |selection: CategorySelection| {
        load_products(selection);
    });

    let on_search = Callback::new(move |text: String| {
        store.update(|s| {
            s.search(&text);
        });
    });

    let on_add = Callback::new(move |product: Product| {
        store.update(|s| {
            s.add_to_cart(product);
        });
        acknowledge_added();
    });

    let on_toggle_cart = Callback::new(move |()| {
        store.update(|s| {
            s.toggle_cart();
        });
    });

    // Derived views of the state container
    let categories = Signal::derive(move || store.with(|s| s.catalog().categories().to_vec()));
    let selected_category = Signal::derive(move || store.with(|s| s.filter().category().clone()));
    let displayed = Signal::derive(move || store.with(|s| s.displayed_products().to_vec()));
    let cart_count = Signal::derive(move || store.with(|s| s.cart().count()));
    let cart_entries = Signal::derive(move || store.with(|s| s.cart().entries().to_vec()));
    let cart_total = Signal::derive(move || store.with(|s| s.cart().total_display()));
    let cart_shown = move || store.with(|s| s.cart_panel().is_shown());

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            <StoreHeader
                cart_count=cart_count
                on_toggle_cart=on_toggle_cart
                query=query
                on_search=on_search
            />

            <section class="mt-6 px-4 flex flex-col md:flex-row gap-6">
                <nav class="md:w-56 flex-shrink-0">
                    <CategorySelect
                        categories=categories
                        selected=selected_category
                        on_change=on_category
                    />
                </nav>

                <main class="flex-1 min-w-0">
                    <ProductGrid products=displayed on_add=on_add />
                </main>
            </section>

            <StoreFooter />

            <Show when=cart_shown>
                <CartOverlay
                    entries=cart_entries
                    total=cart_total
                    on_close=on_toggle_cart
                />
            </Show>
        </div>
    }
}

/// Blocking confirmation after an add. Only reachable from a click handler,
/// so it never runs during SSR.
fn acknowledge_added() {
    if let Err(e) = window().alert_with_message(ADDED_TO_CART_MESSAGE) {
        tracing::warn!("Could not show cart confirmation: {:?}", e);
    }
}
