//! Navigation Bar Component
//!
//! Page links, theme toggle, and either the login button or the user's menus.

use leptos::prelude::*;
use findit_core::Toast;

use crate::components::NotificationBell;
use crate::context::{use_app_context, Page};
use crate::store::{store_logout, store_set_theme, use_app_store, AppStateStoreFields};

/// Which nav dropdown is open; opening one closes the other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMenu {
    User,
    Notifications,
}

const LINKS: [(Page, &str); 4] = [
    (Page::Home, "Home"),
    (Page::Browse, "Browse Items"),
    (Page::ReportLost, "Report Lost"),
    (Page::ReportFound, "Report Found"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let open_menu = RwSignal::new(None::<NavMenu>);
    let (mobile_open, set_mobile_open) = signal(false);

    let go = move |page: Page| {
        set_mobile_open.set(false);
        open_menu.set(None);
        ctx.navigate(page);
    };

    let logout = move |_| {
        store_logout(&store);
        open_menu.set(None);
        ctx.toast(Toast::success("Logged out successfully"));
        ctx.navigate(Page::Home);
    };

    view! {
        <nav class="navbar">
            <div class="nav-container">
                <a href="#" class="nav-logo" on:click=move |ev| { ev.prevent_default(); go(Page::Home); }>
                    <i class="fas fa-search-location"></i>
                    " FindIt"
                </a>
                <ul class=move || if mobile_open.get() { "nav-menu active" } else { "nav-menu" }>
                    {LINKS
                        .into_iter()
                        .map(|(page, label)| view! {
                            <li class="nav-item">
                                <a
                                    href="#"
                                    class=move || if ctx.page.get() == page { "nav-link active" } else { "nav-link" }
                                    on:click=move |ev| { ev.prevent_default(); go(page); }
                                >
                                    {label}
                                </a>
                            </li>
                        })
                        .collect_view()}

                    {move || match store.user().get() {
                        Some(user) => view! {
                            <NotificationBell open_menu=open_menu />
                            <li class="nav-item user-menu-nav">
                                <a
                                    href="#"
                                    class="nav-link login-btn"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                        open_menu.update(|m| {
                                            *m = if *m == Some(NavMenu::User) { None } else { Some(NavMenu::User) };
                                        });
                                    }
                                >
                                    <i class="fas fa-user"></i>
                                    " "{user.name.clone()}
                                </a>
                                <Show when=move || open_menu.get() == Some(NavMenu::User)>
                                    <div class="user-menu" on:click=|ev| ev.stop_propagation()>
                                        <div class="user-menu-item" on:click=move |_| go(Page::Profile)>
                                            <i class="fas fa-user"></i>" Profile"
                                        </div>
                                        <div class="user-menu-item" on:click=move |_| go(Page::MyItems)>
                                            <i class="fas fa-list"></i>" My Items"
                                        </div>
                                        <div class="user-menu-item" on:click=logout>
                                            <i class="fas fa-sign-out-alt"></i>" Logout"
                                        </div>
                                    </div>
                                </Show>
                            </li>
                        }.into_any(),
                        None => view! {
                            <li class="nav-item">
                                <a href="#" class="nav-link login-btn" on:click=move |ev| { ev.prevent_default(); go(Page::Login); }>
                                    "Login"
                                </a>
                            </li>
                        }.into_any(),
                    }}

                    <li class="nav-item">
                        <a
                            href="#"
                            class="nav-link theme-toggle"
                            on:click=move |ev| {
                                ev.prevent_default();
                                store_set_theme(&store, store.theme().get_untracked().toggled());
                            }
                        >
                            <i id="theme-icon" class=move || store.theme().get().toggle_icon()></i>
                        </a>
                    </li>
                </ul>
                <div
                    class=move || if mobile_open.get() { "hamburger active" } else { "hamburger" }
                    on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}
