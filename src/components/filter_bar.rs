//! Filter Bar Component
//!
//! Search/status/category/location/sort controls. Free-text fields are
//! debounced; selects apply immediately.

use leptos::prelude::*;
use findit_core::pipeline::{FilterState, SortKey};
use findit_core::{Category, ItemStatus, Toast};

use crate::context::use_app_context;
use crate::timers::{Debouncer, DEBOUNCE_MS};

#[component]
pub fn FilterBar(
    initial: FilterState,
    #[prop(into)] on_change: Callback<FilterState>,
) -> impl IntoView {
    let ctx = use_app_context();
    let search = RwSignal::new(initial.search_term.clone());
    let status = RwSignal::new(initial.status);
    let category = RwSignal::new(initial.category);
    let location = RwSignal::new(initial.location_term.clone());
    let sort = RwSignal::new(initial.sort);
    let debounce = Debouncer::new(DEBOUNCE_MS);

    let current = move || FilterState {
        search_term: search.get_untracked(),
        status: status.get_untracked(),
        category: category.get_untracked(),
        location_term: location.get_untracked(),
        sort: sort.get_untracked(),
    };
    let apply = move || {
        debounce.cancel();
        on_change.run(current());
    };
    let apply_later = move || debounce.call(move || on_change.run(current()));

    let clear = move |_| {
        let mut cleared = current();
        cleared.clear();
        search.set(cleared.search_term);
        status.set(cleared.status);
        category.set(cleared.category);
        location.set(cleared.location_term);
        sort.set(cleared.sort);
        apply();
        ctx.toast(Toast::info("Filters cleared"));
    };

    view! {
        <div class="filters-section">
            <div class="search-box">
                <i class="fas fa-search"></i>
                <input
                    type="text"
                    id="search-input"
                    placeholder="Search items..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        search.set(event_target_value(&ev));
                        apply_later();
                    }
                />
            </div>
            <div class="filter-controls">
                <select
                    id="status-filter"
                    prop:value=move || status.get().map(|s| s.as_str()).unwrap_or("")
                    on:change=move |ev| {
                        status.set(ItemStatus::parse(&event_target_value(&ev)));
                        apply();
                    }
                >
                    <option value="">"All Status"</option>
                    {ItemStatus::ALL
                        .iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
                <select
                    id="category-filter"
                    prop:value=move || category.get().map(|c| c.as_str()).unwrap_or("")
                    on:change=move |ev| {
                        category.set(Category::parse(&event_target_value(&ev)));
                        apply();
                    }
                >
                    <option value="">"All Categories"</option>
                    {Category::ALL
                        .iter()
                        .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                        .collect_view()}
                </select>
                <input
                    type="text"
                    id="location-filter"
                    placeholder="Location..."
                    prop:value=move || location.get()
                    on:input=move |ev| {
                        location.set(event_target_value(&ev));
                        apply_later();
                    }
                />
                <select
                    id="sort-select"
                    prop:value=move || sort.get().as_str()
                    on:change=move |ev| {
                        sort.set(SortKey::parse(&event_target_value(&ev)));
                        apply();
                    }
                >
                    {SortKey::ALL
                        .iter()
                        .map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
                        .collect_view()}
                </select>
                <button class="btn btn-outline" on:click=clear>
                    <i class="fas fa-times"></i>
                    " Clear Filters"
                </button>
            </div>
        </div>
    }
}
