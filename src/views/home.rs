//! Home Page
//!
//! Hero search, quick actions and the recent-items strip.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use findit_core::Toast;

use crate::components::{ItemList, ListConfig};
use crate::context::{use_app_context, Page};
use crate::storage::session_store;

const WELCOME_DELAY_MS: u32 = 1_000;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let query = RwSignal::new(String::new());

    if session_store().take_welcome() {
        Timeout::new(WELCOME_DELAY_MS, move || {
            ctx.toast(Toast::info("Welcome to FindIt! Help reunite lost items with their owners."));
        })
        .forget();
    }

    let search = move || {
        let term = query.get_untracked().trim().to_string();
        if !term.is_empty() {
            ctx.search_for(term);
        }
    };

    view! {
        <section class="hero">
            <div class="hero-content">
                <h1>"Lost Something? Found Something?"</h1>
                <p>"Connect with your community to reunite lost items with their owners."</p>
                <div class="hero-search">
                    <input
                        type="text"
                        id="hero-search"
                        placeholder="Search for lost or found items..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                        on:keypress=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                search();
                            }
                        }
                    />
                    <button class="search-btn" on:click=move |_| search()>
                        <i class="fas fa-search"></i>
                    </button>
                </div>
                <div class="hero-actions">
                    <button class="btn btn-primary" on:click=move |_| ctx.navigate(Page::ReportLost)>
                        <i class="fas fa-exclamation-circle"></i>
                        " Report Lost Item"
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| ctx.navigate(Page::ReportFound)>
                        <i class="fas fa-hand-holding"></i>
                        " Report Found Item"
                    </button>
                </div>
            </div>
        </section>

        <section class="recent-items">
            <div class="section-header">
                <h2>"Recent Items"</h2>
                <a href="#" class="view-all" on:click=move |ev| { ev.prevent_default(); ctx.navigate(Page::Browse); }>
                    "View All "<i class="fas fa-arrow-right"></i>
                </a>
            </div>
            <ItemList config=ListConfig::recent() />
        </section>
    }
}
