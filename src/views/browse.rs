//! Browse Page

use leptos::prelude::*;
use findit_core::pipeline::FilterState;
use findit_core::Toast;

use crate::components::{ItemList, ListConfig};
use crate::context::use_app_context;

#[component]
pub fn BrowsePage() -> impl IntoView {
    let ctx = use_app_context();
    let mut initial = FilterState::default();
    if let Some(term) = ctx.take_search() {
        ctx.toast(Toast::info(format!("Searching for \"{}\"", term)));
        initial.search_term = term;
    }

    view! {
        <section class="browse-section">
            <div class="browse-header">
                <h1>"Browse Items"</h1>
                <p>"Search through lost and found items in your area"</p>
            </div>
            <ItemList config=ListConfig::browse() initial_filter=initial />
        </section>
    }
}
