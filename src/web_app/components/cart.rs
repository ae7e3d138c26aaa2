// web_app/components/cart.rs - Cart UI components
//
// - CartButton: Header toggle with a live count badge
// - CartOverlay: Entries, total, and a close button
// - CartLine: One cart entry

use leptos::prelude::*;

use super::common::{Overlay, PriceDisplay};
use crate::web_app::store::CartEntry;

/// Text shown in the overlay when nothing has been added yet
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Header button that toggles the cart overlay
#[component]
pub fn CartButton(
    /// Number of entries in the cart
    count: Signal<usize>,
    /// Toggle handler
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="relative px-4 py-2 bg-amber-400 text-gray-900 rounded-lg \
                   hover:bg-amber-500 font-medium transition-colors"
            on:click=move |_| on_toggle.run(())
        >
            "Your Cart"
            <span class="absolute -top-2 -right-2 min-w-6 h-6 px-1 rounded-full bg-red-600 \
                         text-white text-xs font-bold flex items-center justify-center">
                {move || count.get()}
            </span>
        </button>
    }
}

/// A single cart entry
#[component]
pub fn CartLine(entry: CartEntry) -> impl IntoView {
    let added = format!("Added {}", entry.added_time_label());
    let product = entry.product;
    let alt = product.title.clone();

    view! {
        <div class="flex items-center gap-3 mb-3">
            <img
                src=product.image
                alt=alt
                width="50"
                height="50"
                class="object-contain"
            />
            <div>
                <p class="text-sm text-gray-800">{product.title}</p>
                <PriceDisplay price=product.price highlight=true />
                <p class="text-xs text-gray-400">{added}</p>
            </div>
        </div>
    }
}

/// Cart overlay listing every entry and the total
#[component]
pub fn CartOverlay(
    /// Entries in add order
    entries: Signal<Vec<CartEntry>>,
    /// Total, already formatted with two decimals
    total: Signal<String>,
    /// Close handler (toggles visibility)
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Overlay title="Your Cart" on_close=on_close>
            <button
                type="button"
                class="w-full mb-4 px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700 transition-colors"
                on:click=move |_| on_close.run(())
            >
                "Close Cart"
            </button>

            <Show
                when=move || !entries.get().is_empty()
                fallback=|| view! { <p class="text-center text-gray-500">{EMPTY_CART_MESSAGE}</p> }
            >
                <div>
                    // Duplicates are allowed, so entries are keyed by position
                    <For
                        each=move || entries.get().into_iter().enumerate()
                        key=|(index, _)| *index
                        children=move |(_, entry)| view! { <CartLine entry=entry /> }
                    />
                    <hr class="my-3 border-gray-200" />
                    <h6 class="font-bold">{move || format!("Total: ${}", total.get())}</h6>
                </div>
            </Show>
        </Overlay>
    }
}
