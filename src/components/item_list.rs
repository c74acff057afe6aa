//! Item List Component
//!
//! Fetches the item collection once and runs it through the list pipeline.
//! Browse and the home "recent items" strip are two configurations of it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use findit_core::pipeline::{FilterState, ListState, ITEMS_PER_PAGE, RECENT_ITEMS};

use crate::commands;
use crate::components::{FilterBar, ItemCard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    /// Items per page (or the whole strip when not paginated)
    pub page_size: usize,
    /// Offer "load more"
    pub paginate: bool,
    /// Filter bar and results counter
    pub show_controls: bool,
}

impl ListConfig {
    pub fn browse() -> Self {
        Self { page_size: ITEMS_PER_PAGE, paginate: true, show_controls: true }
    }

    /// Newest few, no controls
    pub fn recent() -> Self {
        Self { page_size: RECENT_ITEMS, paginate: false, show_controls: false }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum LoadState {
    Loading,
    Failed(String),
    Ready,
}

#[component]
pub fn ItemList(
    config: ListConfig,
    /// Starting filter (e.g. a search handed over from the home page)
    #[prop(optional)]
    initial_filter: FilterState,
) -> impl IntoView {
    let list = RwSignal::new({
        let mut state = ListState::new(config.page_size);
        state.apply_filter(initial_filter.clone());
        state
    });
    let (load_state, set_load_state) = signal(LoadState::Loading);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::info!("[ItemList] loading items, trigger={}", trigger);
        set_load_state.set(LoadState::Loading);
        spawn_local(async move {
            match commands::list_items().await {
                Ok(items) => {
                    list.update(|state| state.set_items(items));
                    set_load_state.set(LoadState::Ready);
                }
                Err(e) => {
                    log::error!("[ItemList] load failed: {}", e);
                    set_load_state.set(LoadState::Failed(e.user_message("Failed to load items")));
                }
            }
        });
    });

    let on_filter = Callback::new(move |filter: FilterState| {
        list.update(|state| state.apply_filter(filter));
    });

    let cards = move || {
        view! {
            <Show
                when=move || !list.with(ListState::is_empty)
                fallback=|| view! {
                    <div class="no-results">
                        <i class="fas fa-search"></i>
                        <h3>"No items found"</h3>
                        <p>"Try adjusting your search criteria or filters"</p>
                    </div>
                }
            >
                <For
                    each=move || list.with(|state| state.displayed().to_vec())
                    key=|item| item.clone()
                    children=move |item| view! { <ItemCard item=item /> }
                />
            </Show>
        }
    };

    view! {
        <div class="item-list">
            {config.show_controls.then(|| view! {
                <FilterBar initial=initial_filter.clone() on_change=on_filter />
                <p class="results-count">{move || list.with(ListState::results_label)}</p>
            })}

            <div class="items-grid">
                {move || match load_state.get() {
                    LoadState::Loading => view! {
                        <div class="loading-state">
                            <i class="fas fa-spinner fa-spin"></i>
                            <p>"Loading items..."</p>
                        </div>
                    }.into_any(),
                    LoadState::Failed(message) => view! {
                        <div class="error-state">
                            <i class="fas fa-exclamation-triangle"></i>
                            <h3>"Error Loading Items"</h3>
                            <p>{message}</p>
                            <button
                                class="btn btn-primary"
                                on:click=move |_| set_reload_trigger.update(|v| *v += 1)
                            >
                                <i class="fas fa-redo"></i>
                                " Try Again"
                            </button>
                        </div>
                    }.into_any(),
                    LoadState::Ready => cards().into_any(),
                }}
            </div>

            <Show when=move || {
                config.paginate
                    && load_state.with(|s| *s == LoadState::Ready)
                    && list.with(ListState::has_more)
            }>
                <div class="load-more">
                    <button
                        id="load-more-btn"
                        class="btn btn-outline"
                        on:click=move |_| {
                            list.update(|state| {
                                state.load_more();
                            });
                        }
                    >
                        "Load More"
                    </button>
                </div>
            </Show>
        </div>
    }
}
