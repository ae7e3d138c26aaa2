// web_app/components/layout.rs - Page chrome
//
// StoreHeader: brand, cart toggle, and search bar.
// StoreFooter: static login/contact/social columns. The login form is
// decorative and wired to nothing.

use chrono::Datelike;
use leptos::prelude::*;

use super::cart::CartButton;
use super::search::SearchBar;

pub const BRAND: &str = "Fakestore";

/// Social profiles linked from the footer: (network, url)
pub const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Facebook", "https://facebook.com"),
    ("Twitter", "https://twitter.com"),
    ("Instagram", "https://instagram.com"),
    ("LinkedIn", "https://linkedin.com"),
];

pub fn copyright_notice(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, BRAND)
}

#[component]
pub fn StoreHeader(
    /// Live cart count
    cart_count: Signal<usize>,
    /// Cart toggle handler
    on_toggle_cart: Callback<()>,
    /// Text in the search input
    query: RwSignal<String>,
    /// Search handler
    on_search: Callback<String>,
) -> impl IntoView {
    view! {
        <header class="flex flex-wrap gap-4 items-center justify-between p-3 bg-gray-900 text-white">
            <div class="flex items-center gap-8">
                <span class="text-2xl font-bold mx-6">{BRAND}</span>
                <CartButton count=cart_count on_toggle=on_toggle_cart />
            </div>
            <SearchBar query=query on_search=on_search />
        </header>
    }
}

#[component]
pub fn StoreFooter() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="bg-gray-900 text-white mt-12 py-8">
            <div class="max-w-6xl mx-auto px-4 grid grid-cols-1 md:grid-cols-3 gap-8">
                <div>
                    <h5 class="font-bold mb-2">"Login"</h5>
                    <p class="text-sm text-gray-300 mb-2">
                        "Access your account to track orders and manage preferences."
                    </p>
                    <input
                        type="email"
                        placeholder="Enter Email"
                        class="w-full px-3 py-2 rounded text-gray-900"
                    />
                    <button type="button" class="mt-2 px-4 py-2 bg-white text-gray-900 rounded">
                        "Login"
                    </button>
                </div>

                <div>
                    <h5 class="font-bold mb-2">"Contact Us"</h5>
                    <p class="text-sm">"Email: support@fakestore.com"</p>
                    <p class="text-sm">"Phone: +1 (555) 123-4567"</p>
                    <p class="text-sm">"Address: 1234 Fake Street, Faketown, USA"</p>
                </div>

                <div>
                    <h5 class="font-bold mb-2">"Follow Us"</h5>
                    <div class="flex gap-2">
                        {SOCIAL_LINKS.into_iter().map(|(network, url)| view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-2 py-1 text-sm border border-white rounded hover:bg-white hover:text-gray-900"
                            >
                                {network}
                            </a>
                        }).collect_view()}
                    </div>
                </div>
            </div>

            <p class="text-center text-sm mt-6">{copyright_notice(year)}</p>
        </footer>
    }
}
