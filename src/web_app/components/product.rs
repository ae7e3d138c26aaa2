// web_app/components/product.rs - Product display components
//
// Components for displaying products including:
// - ProductCard: Grid card with image, title, price, and add-to-cart
// - ProductGrid: Grid layout for the displayed set, with empty state
// - EmptyState: The "No products found." message

use leptos::prelude::*;

use super::common::{Button, PriceDisplay};
use crate::web_app::model::Product;

/// Empty-state text shown when the displayed set is empty
pub const NO_PRODUCTS_MESSAGE: &str = "No products found.";

/// Product card for the storefront grid
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
    /// Add-to-cart handler; receives a copy of the product
    on_add: Callback<Product>,
) -> impl IntoView {
    let title = product.title.clone();
    let alt = product.title.clone();
    let image = product.image.clone();
    let price = product.price;

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-100 p-2 w-52 flex flex-col">
            <img
                src=image
                alt=alt
                class="h-32 w-full object-contain"
            />

            <div class="h-36 overflow-hidden px-1 py-2 border-b border-gray-100 text-sm font-medium text-gray-800">
                {title}
            </div>

            <dl class="px-1 py-2 flex-1">
                <dt class="text-xs font-bold text-gray-500 uppercase">"Price"</dt>
                <dd>
                    <PriceDisplay price=price />
                </dd>
            </dl>

            <Button
                class="w-full"
                on_click=Callback::new(move |()| on_add.run(product.clone()))
            >
                "Add to Cart"
            </Button>
        </div>
    }
}

/// Empty-state message for the product grid
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <p class="text-center w-full mt-12 text-gray-500">{NO_PRODUCTS_MESSAGE}</p>
    }
}

/// Grid of product cards for the displayed set
#[component]
pub fn ProductGrid(
    /// Products currently displayed
    products: Signal<Vec<Product>>,
    /// Add-to-cart handler
    on_add: Callback<Product>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-4 overflow-auto h-[500px] content-start">
            <Show
                when=move || !products.get().is_empty()
                fallback=|| view! { <EmptyState /> }
            >
                <For
                    each=move || products.get()
                    key=|product| product.id
                    children=move |product| {
                        view! {
                            <ProductCard product=product on_add=on_add />
                        }
                    }
                />
            </Show>
        </div>
    }
}
