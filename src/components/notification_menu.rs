//! Notification Bell Component
//!
//! Bell with unread badge; opens a menu listing the latest notifications.

use leptos::prelude::*;
use leptos::task::spawn_local;
use findit_core::format::time_ago;
use findit_core::notify::badge_text;
use findit_core::Notification;

use crate::commands;
use crate::components::NavMenu;
use crate::context::{use_app_context, Page};
use crate::store::{store_mark_read, use_app_store, AppStateStoreFields};
use crate::timers::local_now;

#[component]
pub fn NotificationBell(open_menu: RwSignal<Option<NavMenu>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let is_open = move || open_menu.get() == Some(NavMenu::Notifications);

    let toggle = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if is_open() {
            open_menu.set(None);
            return;
        }
        open_menu.set(Some(NavMenu::Notifications));
        let Some(user_id) = store.user().with_untracked(|u| u.as_ref().map(|u| u.id)) else {
            return;
        };
        spawn_local(async move {
            match commands::list_notifications(user_id).await {
                Ok(batch) => store.notifications().set(batch),
                Err(e) => log::warn!("[Notifications] fetch failed: {}", e),
            }
        });
    };

    let open_notification = move |n: Notification| {
        spawn_local(async move {
            if let Err(e) = commands::mark_notification_read(n.id).await {
                log::warn!("[Notifications] mark read failed: {}", e);
                return;
            }
            store_mark_read(&store, n.id);
            open_menu.set(None);
            if n.is_claim() && n.item_id.is_some() {
                ctx.navigate(Page::MyItems);
            }
        });
    };

    view! {
        <li class="nav-item notification-item-nav">
            <a href="#" class="nav-link" id="notification-btn" on:click=toggle>
                <i class="fas fa-bell"></i>
                {move || badge_text(store.unread().get())
                    .map(|text| view! { <span class="notification-badge">{text}</span> })}
            </a>
            <Show when=is_open>
                <div class="notification-menu" on:click=|ev| ev.stop_propagation()>
                    {move || {
                        let notifications = store.notifications().get();
                        if notifications.is_empty() {
                            return view! { <div class="notification-empty">"No notifications"</div> }.into_any();
                        }
                        let now = local_now();
                        view! {
                            <div class="notification-header">
                                <h3>"Notifications"</h3>
                            </div>
                            <div class="notification-list">
                                {notifications
                                    .into_iter()
                                    .map(|n| {
                                        let row_class = if n.read { "notification-item read" } else { "notification-item unread" };
                                        let age = time_ago(&n.created_at, now);
                                        let unread = !n.read;
                                        let icon = format!("fas {}", n.icon());
                                        let (title, message) = (n.title.clone(), n.message.clone());
                                        view! {
                                            <div class=row_class on:click=move |_| open_notification(n.clone())>
                                                <div class="notif-icon"><i class=icon></i></div>
                                                <div class="notif-content">
                                                    <div class="notif-title">{title}</div>
                                                    <div class="notif-message">{message}</div>
                                                    <div class="notif-time">{age}</div>
                                                </div>
                                                {unread.then(|| view! { <div class="notif-dot"></div> })}
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }}
                </div>
            </Show>
        </li>
    }
}
