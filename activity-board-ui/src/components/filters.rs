//! Filter Bar Component
//!
//! Category, search, and sort controls. Each change updates the view state,
//! which recomputes the card list.

use leptos::*;

use activity_board::SortKey;

use crate::state::use_global_state;

#[component]
pub fn FilterBar() -> impl IntoView {
    let state = use_global_state();
    let categories = state.category_options();

    let category = move || state.view.with(|v| v.filters.category.clone());
    let search = move || state.view.with(|v| v.filters.search.clone());
    let sort = move || state.view.with(|v| v.filters.sort.as_value());

    view! {
        <div class="grid md:grid-cols-3 gap-4 bg-gray-800 rounded-xl p-4">
            <div>
                <label for="filter-category" class="block text-sm text-gray-400 mb-2">"Category"</label>
                <select
                    id="filter-category"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.view.update(|v| v.set_category(value));
                    }
                    prop:value=category
                    class="w-full bg-gray-700 rounded-lg px-4 py-2 border border-gray-600
                           focus:border-primary-500 focus:outline-none"
                >
                    <For
                        each=move || categories.get()
                        key=|option| option.value.clone()
                        children=move |option| {
                            let selected = option.value.clone();
                            view! {
                                <option
                                    value=option.value.clone()
                                    selected=move || category() == selected
                                >
                                    {option.label}
                                </option>
                            }
                        }
                    />
                </select>
            </div>

            <div>
                <label for="filter-search" class="block text-sm text-gray-400 mb-2">"Search"</label>
                <input
                    id="filter-search"
                    type="text"
                    placeholder="Search activities..."
                    prop:value=search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.view.update(|v| v.set_search(value));
                    }
                    class="w-full bg-gray-700 rounded-lg px-4 py-2 border border-gray-600
                           focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label for="filter-sort" class="block text-sm text-gray-400 mb-2">"Sort by"</label>
                <select
                    id="filter-sort"
                    on:change=move |ev| {
                        let key = SortKey::from_value(&event_target_value(&ev));
                        state.view.update(|v| v.set_sort(key));
                    }
                    prop:value=sort
                    class="w-full bg-gray-700 rounded-lg px-4 py-2 border border-gray-600
                           focus:border-primary-500 focus:outline-none"
                >
                    <option value="">"Default"</option>
                    <option value="name">"Name"</option>
                    <option value="category">"Category"</option>
                </select>
            </div>
        </div>
    }
}
