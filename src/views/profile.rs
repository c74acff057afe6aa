//! Profile Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use findit_core::{Toast, UserStats};

use crate::commands;
use crate::context::{use_app_context, Page};
use crate::store::{store_logout, use_app_store, AppStateStoreFields};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (stats, set_stats) = signal(UserStats::default());

    Effect::new(move |_| {
        let Some(user_id) = store.user().with_untracked(|u| u.as_ref().map(|u| u.id)) else {
            ctx.navigate(Page::Login);
            return;
        };
        spawn_local(async move {
            match commands::user_stats(user_id).await {
                Ok(loaded) => set_stats.set(loaded),
                Err(e) => log::warn!("[Profile] stats failed: {}", e),
            }
        });
    });

    let logout = move |_| {
        store_logout(&store);
        ctx.toast(Toast::info("Logging out..."));
        ctx.navigate(Page::Home);
    };

    let info = move |icon: &'static str, label: &'static str, value: Option<String>| {
        view! {
            <div class="info-item">
                <i class=icon></i>
                <div>
                    <strong>{label}</strong>
                    <span>{value.filter(|v| !v.is_empty()).unwrap_or_else(|| "Not provided".to_string())}</span>
                </div>
            </div>
        }
    };

    move || {
        let Some(user) = store.user().get() else {
            return view! { <div class="loading-state"><p>"Redirecting to login..."</p></div> }.into_any();
        };
        view! {
            <section class="profile-section">
                <div class="profile-header">
                    <div class="profile-avatar"><i class="fas fa-user-circle"></i></div>
                    <div>
                        <h1 class="profile-name">{user.name.clone()}</h1>
                        <p class="profile-email">{user.email.clone()}</p>
                    </div>
                    <button id="edit-profile-btn" class="btn btn-outline" on:click=move |_| ctx.navigate(Page::EditProfile)>
                        <i class="fas fa-edit"></i>
                        " Edit Profile"
                    </button>
                </div>

                <div class="stats-grid">
                    <StatCard label="Total Reports" value=Signal::derive(move || stats.get().total) />
                    <StatCard label="Lost Items" value=Signal::derive(move || stats.get().lost) />
                    <StatCard label="Found Items" value=Signal::derive(move || stats.get().found) />
                    <StatCard label="Recovered" value=Signal::derive(move || stats.get().recovered) />
                </div>

                <div class="info-grid">
                    {info("fas fa-user", "Full Name", Some(user.name.clone()))}
                    {info("fas fa-envelope", "Email", Some(user.email.clone()))}
                    {info("fas fa-phone", "Phone", user.phone.clone())}
                    {info("fas fa-map-marker-alt", "Location", user.location.clone())}
                    {info("fas fa-calendar", "Member Since", user.join_date.clone())}
                </div>

                <div class="profile-actions">
                    <button class="btn btn-primary" on:click=move |_| ctx.navigate(Page::MyItems)>
                        <i class="fas fa-list"></i>
                        " My Items"
                    </button>
                    <button class="btn btn-outline" on:click=logout>
                        <i class="fas fa-sign-out-alt"></i>
                        " Logout"
                    </button>
                </div>
            </section>
        }
        .into_any()
    }
}

#[component]
fn StatCard(label: &'static str, value: Signal<u32>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-number">{move || value.get()}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
