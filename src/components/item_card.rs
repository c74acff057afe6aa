//! Item Card Component

use leptos::prelude::*;
use findit_core::format::relative_day;
use findit_core::{Item, ItemImage};

use crate::config::config;
use crate::context::use_app_context;
use crate::timers::local_now;

/// Image slot: uploaded photo, else the glyph
#[component]
pub fn ItemImageView(item: Item) -> impl IntoView {
    match item.display_image() {
        ItemImage::Upload(path) => view! {
            <img class="item-photo" src=config().upload_url(&path) alt=item.title.clone() />
        }
        .into_any(),
        ItemImage::Glyph(glyph) => view! { <span class="item-glyph">{glyph}</span> }.into_any(),
    }
}

/// Grid card; clicking it opens the detail page
#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id;
    let date = relative_day(&item.date, item.time.as_deref(), local_now());
    let reward = item.reward().map(str::to_string);
    let status = item.status;

    view! {
        <div class="item-card" on:click=move |_| ctx.open_item(id)>
            <div class="item-image">
                <ItemImageView item=item.clone() />
            </div>
            <div class="item-content">
                <div class="item-header">
                    <h3 class="item-title">{item.title.clone()}</h3>
                    <span class=format!("status-badge status-{}", status.as_str())>{status.as_str()}</span>
                </div>
                <p class="item-description">{item.description.clone()}</p>
                <div class="item-meta">
                    <span class="item-location">
                        <i class="fas fa-map-marker-alt"></i>
                        " "{item.location.clone()}
                    </span>
                    <span class="item-date">{date}</span>
                </div>
                {reward.map(|r| view! { <div class="item-reward">"Reward: "{r}</div> })}
            </div>
        </div>
    }
}
