// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the storefront.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;
use rust_decimal::Decimal;

use crate::web_app::model::format_price;

/// Primary (amber) button component
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 bg-amber-400 text-gray-900 rounded-lg hover:bg-amber-500 \
                      transition-colors font-medium shadow-sm active:transform active:scale-95";

    view! {
        <button
            type=button_type
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Price display component
///
/// Always shows a dollar sign and two decimals.
#[component]
pub fn PriceDisplay(
    /// The price value
    price: Decimal,
    /// Whether to highlight (green, bolder)
    #[prop(default = false)]
    highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "font-bold text-green-600"
    } else {
        "text-gray-900 font-medium"
    };

    view! {
        <span class=class>
            {format!("${}", format_price(price))}
        </span>
    }
}

/// Centered overlay panel
///
/// Open/close is owned by the parent; this only renders the chrome and
/// reports Escape presses and backdrop clicks through `on_close`.
#[component]
pub fn Overlay(
    /// Panel content
    children: Children,
    /// Callback when the overlay should close
    on_close: Callback<()>,
    /// Panel title
    #[prop(default = "")]
    title: &'static str,
) -> impl IntoView {
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4"
            on:keydown=handle_keydown
        >
            <div
                class="absolute inset-0 bg-gray-900/50 transition-opacity"
                on:click=move |_| on_close.run(())
            ></div>

            <div
                class="relative bg-gray-50 rounded-xl shadow-2xl w-full max-w-sm max-h-[90vh] \
                       flex flex-col overflow-hidden p-6"
                on:click=|ev| ev.stop_propagation()
            >
                <h2 class="text-lg font-bold text-center text-gray-800 mb-4">{title}</h2>
                <div class="overflow-y-auto">
                    {children()}
                </div>
            </div>
        </div>
    }
}
