//! My Items Page
//!
//! The logged-in user's own reports, tabbed by status.

use leptos::prelude::*;
use leptos::task::spawn_local;
use findit_core::format::long_date_time;
use findit_core::{Item, ItemStatus, Toast};

use crate::commands;
use crate::components::{DeleteConfirmButton, ItemImageView};
use crate::context::{use_app_context, Page};
use crate::store::{use_app_store, AppStateStoreFields};

/// Tab label and icon; `None` is the "all" tab
fn tab_label(tab: Option<ItemStatus>) -> (&'static str, &'static str) {
    match tab {
        None => ("fas fa-list", "All Items"),
        Some(ItemStatus::Lost) => ("fas fa-exclamation-circle", "Lost Items"),
        Some(ItemStatus::Found) => ("fas fa-hand-holding", "Found Items"),
        Some(ItemStatus::Recovered) => ("fas fa-heart", "Recovered"),
    }
}

fn count_for(items: &[Item], tab: Option<ItemStatus>) -> usize {
    items.iter().filter(|item| tab.map_or(true, |s| item.status == s)).count()
}

#[component]
pub fn MyItemsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (items, set_items) = signal(Vec::<Item>::new());
    let (tab, set_tab) = signal(None::<ItemStatus>);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let reload = move || set_reload_trigger.update(|v| *v += 1);

    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let Some(user_id) = store.user().with_untracked(|u| u.as_ref().map(|u| u.id)) else {
            ctx.navigate(Page::Login);
            return;
        };
        log::info!("[MyItems] loading items for user {}, trigger={}", user_id, trigger);
        spawn_local(async move {
            match commands::list_user_items(user_id).await {
                Ok(loaded) => set_items.set(loaded),
                Err(e) => ctx.toast(Toast::error(e.user_message("Failed to load items"))),
            }
        });
    });

    let tabs = [None, Some(ItemStatus::Lost), Some(ItemStatus::Found), Some(ItemStatus::Recovered)];
    let visible = move || {
        let current = tab.get();
        items.with(|all| {
            all.iter()
                .filter(|item| current.map_or(true, |s| item.status == s))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let recover = move |id: u32| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Mark this item as recovered?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match commands::recover_item(id).await {
                Ok(_) => {
                    ctx.toast(Toast::success("Item marked as recovered!"));
                    reload();
                }
                Err(e) => ctx.toast(Toast::error(e.user_message("Failed to update status"))),
            }
        });
    };

    let delete = move |id: u32| {
        spawn_local(async move {
            match commands::delete_item(id).await {
                Ok(_) => {
                    ctx.toast(Toast::success("Item deleted successfully"));
                    reload();
                }
                Err(e) => ctx.toast(Toast::error(e.user_message("Failed to delete item"))),
            }
        });
    };

    view! {
        <section class="my-items-section">
            <div class="page-header">
                <h1>"My Items"</h1>
                <button class="btn btn-primary" on:click=move |_| ctx.navigate(Page::ReportLost)>
                    <i class="fas fa-plus"></i>
                    " Report Item"
                </button>
            </div>

            <div class="tabs">
                {tabs
                    .into_iter()
                    .map(|t| {
                        let (icon, label) = tab_label(t);
                        view! {
                            <button
                                class=move || if tab.get() == t { "tab-btn active" } else { "tab-btn" }
                                on:click=move |_| set_tab.set(t)
                            >
                                <i class=icon></i>
                                {move || format!(" {} ({})", label, items.with(|all| count_for(all, t)))}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show
                when=move || !visible().is_empty()
                fallback=move || view! {
                    <div class="empty-state">
                        <i class="fas fa-box-open"></i>
                        <h3>"No items here yet"</h3>
                        <p>"Items you report will show up on this page."</p>
                    </div>
                }
            >
                <div class="items-container">
                    <For
                        each=visible
                        key=|item| (item.id, item.status)
                        children=move |item| {
                            let id = item.id;
                            let status = item.status;
                            view! {
                                <div class="my-item-card">
                                    <div class="item-card-content">
                                        <div class="item-card-icon">
                                            <ItemImageView item=item.clone() />
                                        </div>
                                        <div class="item-card-details">
                                            <div class="item-card-header">
                                                <h3 class="item-card-title">{item.title.clone()}</h3>
                                                <span class=format!("status-badge status-{}", status.as_str())>
                                                    {status.as_str().to_uppercase()}
                                                </span>
                                            </div>
                                            <div class="item-card-info">
                                                <div class="item-info-row">
                                                    <i class="fas fa-tag"></i>
                                                    <span>{item.category.label()}</span>
                                                </div>
                                                <div class="item-info-row">
                                                    <i class="fas fa-map-marker-alt"></i>
                                                    <span>{item.location.clone()}</span>
                                                </div>
                                                <div class="item-info-row">
                                                    <i class="fas fa-calendar-alt"></i>
                                                    <span>{long_date_time(&item.date, item.time.as_deref())}</span>
                                                </div>
                                            </div>
                                            <p class="item-card-description">{item.description.clone()}</p>
                                        </div>
                                        <div class="item-card-actions">
                                            <button class="btn btn-primary btn-sm" on:click=move |_| ctx.open_item(id)>
                                                <i class="fas fa-eye"></i>
                                                " View Details"
                                            </button>
                                            {(status != ItemStatus::Recovered).then(|| view! {
                                                <button class="btn btn-secondary btn-sm" on:click=move |_| recover(id)>
                                                    <i class="fas fa-heart"></i>
                                                    " Mark Recovered"
                                                </button>
                                            })}
                                            <DeleteConfirmButton
                                                button_class="btn btn-danger btn-sm"
                                                on_confirm=move |_| delete(id)
                                            />
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use findit_core::Category;

    fn make_item(id: u32, status: ItemStatus) -> Item {
        Item {
            id,
            title: format!("Item {}", id),
            description: String::new(),
            status,
            category: Category::Other,
            location: String::new(),
            date: "2024-03-01".into(),
            time: None,
            reward: None,
            image: None,
            image_path: None,
            posted_by: String::new(),
            contact: String::new(),
            additional_info: None,
            views: None,
            user_id: Some(1),
            date_reported: None,
        }
    }

    #[test]
    fn test_tab_counts() {
        let items = vec![
            make_item(1, ItemStatus::Lost),
            make_item(2, ItemStatus::Found),
            make_item(3, ItemStatus::Lost),
            make_item(4, ItemStatus::Recovered),
        ];
        assert_eq!(count_for(&items, None), 4);
        assert_eq!(count_for(&items, Some(ItemStatus::Lost)), 2);
        assert_eq!(count_for(&items, Some(ItemStatus::Found)), 1);
        assert_eq!(count_for(&items, Some(ItemStatus::Recovered)), 1);
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(tab_label(None).1, "All Items");
        assert_eq!(tab_label(Some(ItemStatus::Recovered)).1, "Recovered");
    }
}
