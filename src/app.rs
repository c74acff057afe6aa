//! FindIt Frontend App
//!
//! Root component: provides state, switches pages, applies the theme.

use leptos::prelude::*;
use reactive_stores::Store;
use findit_core::{ItemStatus, Toast};

use crate::components::{NavBar, ToastHost};
use crate::context::{AppContext, Page};
use crate::poller::start_notification_poller;
use crate::store::{AppState, AppStateStoreFields};
use crate::views::{
    BrowsePage, EditProfilePage, HomePage, ItemDetailPage, LoginPage, MyItemsPage, ProfilePage,
    RegisterPage, ReportFormPage,
};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::load());
    let (page, set_page) = signal(Page::Home);
    let (toast, set_toast) = signal::<Option<Toast>>(None);

    // Provide context to all children
    let ctx = AppContext::new((page, set_page), (toast, set_toast));
    provide_context(store);
    provide_context(ctx);

    // Theme lives on <body data-theme=...>
    Effect::new(move |_| {
        let theme = store.theme().get();
        let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
        if let Some(body) = body {
            if let Err(e) = body.set_attribute("data-theme", theme.as_str()) {
                log::warn!("[App] could not set theme: {:?}", e);
            }
        }
    });

    start_notification_poller(store, ctx);

    view! {
        <NavBar />
        <main class="main-content">
            {move || match page.get() {
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::Browse => view! { <BrowsePage /> }.into_any(),
                Page::ItemDetail => view! { <ItemDetailPage /> }.into_any(),
                Page::ReportFound => view! { <ReportFormPage status=ItemStatus::Found /> }.into_any(),
                Page::ReportLost => view! { <ReportFormPage status=ItemStatus::Lost /> }.into_any(),
                Page::Login => view! { <LoginPage /> }.into_any(),
                Page::Register => view! { <RegisterPage /> }.into_any(),
                Page::Profile => view! { <ProfilePage /> }.into_any(),
                Page::MyItems => view! { <MyItemsPage /> }.into_any(),
                Page::EditProfile => view! { <EditProfilePage /> }.into_any(),
            }}
        </main>
        <ToastHost />
    }
}
