// web_app/components/search.rs - Search and category selection components
//
// These components handle the catalog narrowing controls:
// - SearchBar: Text input committed by the Search button (or Enter)
// - CategorySelect: Dropdown of categories, "ALL" first

use leptos::prelude::*;

use crate::web_app::model::{category_label, CategorySelection};

/// Search bar component
///
/// Typing only edits `query`; filtering happens when the form is submitted.
#[component]
pub fn SearchBar(
    /// Text in the search input
    query: RwSignal<String>,
    /// Callback with the text to search for
    on_search: Callback<String>,
) -> impl IntoView {
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(query.get_untracked());
    };

    view! {
        <form on:submit=on_submit class="flex w-full max-w-[500px]">
            <input
                type="text"
                placeholder="Search for a product..."
                class="flex-1 px-4 py-2 rounded-l-lg text-gray-900 \
                       focus:ring-2 focus:ring-amber-300 outline-none"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <button
                type="submit"
                class="px-5 py-2 bg-amber-400 text-gray-900 rounded-r-lg \
                       hover:bg-amber-500 font-semibold transition-colors"
            >
                "Search"
            </button>
        </form>
    }
}

/// Category dropdown
///
/// Option values are raw category names; labels are upper-cased.
#[component]
pub fn CategorySelect(
    /// Category options, "all" first
    categories: Signal<Vec<String>>,
    /// Currently selected category
    selected: Signal<CategorySelection>,
    /// Callback when a category is chosen
    on_change: Callback<CategorySelection>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2">
            <label class="font-bold text-gray-700">"Select Category"</label>
            <select
                class="px-3 py-2 border border-gray-300 rounded-lg bg-white \
                       focus:ring-2 focus:ring-amber-300 outline-none cursor-pointer"
                on:change=move |ev| {
                    on_change.run(CategorySelection::from_value(&event_target_value(&ev)));
                }
            >
                <For
                    each=move || categories.get()
                    key=|category| category.clone()
                    children=move |category| {
                        let label = category_label(&category);
                        let value = category.clone();
                        view! {
                            <option
                                value=category
                                selected=move || selected.get().value() == value
                            >
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
