//! Item Detail Page
//!
//! One item, looked up by the id the list stored in `selectedItemId`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use findit_core::api::ClaimRequest;
use findit_core::format::long_date_time;
use findit_core::validate::validate_claim;
use findit_core::{Item, ItemStatus, Toast};

use crate::commands;
use crate::components::{ItemImageView, Modal};
use crate::context::{use_app_context, Page};
use crate::storage::session_store;
use crate::store::{use_app_store, AppStateStoreFields};

#[derive(Debug, Clone, PartialEq)]
enum DetailState {
    Loading,
    Missing(&'static str),
    Loaded(Item),
}

#[component]
pub fn ItemDetailPage() -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(DetailState::Loading);

    Effect::new(move |_| {
        let Some(id) = session_store().selected_item() else {
            set_state.set(DetailState::Missing("No item selected"));
            return;
        };
        log::info!("[ItemDetail] loading item {}", id);
        spawn_local(async move {
            match commands::get_item(id).await {
                Ok(item) => set_state.set(DetailState::Loaded(item)),
                Err(e) => {
                    log::warn!("[ItemDetail] item {}: {}", id, e);
                    set_state.set(DetailState::Missing("Item not found"));
                }
            }
        });
    });

    move || match state.get() {
        DetailState::Loading => view! {
            <div class="loading-state">
                <i class="fas fa-spinner fa-spin"></i>
                <p>"Loading item details..."</p>
            </div>
        }
        .into_any(),
        DetailState::Missing(message) => view! {
            <div class="error-state">
                <i class="fas fa-exclamation-triangle"></i>
                <h3>{message}</h3>
                <button class="btn btn-primary" on:click=move |_| ctx.navigate(Page::Browse)>
                    <i class="fas fa-arrow-left"></i>
                    " Back to Browse"
                </button>
            </div>
        }
        .into_any(),
        DetailState::Loaded(item) => view! { <ItemDetailCard item=item /> }.into_any(),
    }
}

#[component]
fn ItemDetailCard(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let claim_open = RwSignal::new(false);
    let contact_open = RwSignal::new(false);
    let is_lost = item.status == ItemStatus::Lost;
    let status_icon = if is_lost { "fas fa-exclamation-circle" } else { "fas fa-hand-holding" };

    let share = move |_| {
        let Some(window) = web_sys::window() else { return };
        let Ok(href) = window.location().href() else { return };
        let promise = window.navigator().clipboard().write_text(&href);
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => ctx.toast(Toast::success("Link copied to clipboard!")),
                Err(e) => log::warn!("[ItemDetail] clipboard write failed: {:?}", e),
            }
        });
    };

    view! {
        <div class="detail-card">
            <div class="detail-image-section">
                <div class="detail-image">
                    <ItemImageView item=item.clone() />
                </div>
                <div class=format!("status-badge-large status-{}", item.status.as_str())>
                    <i class=status_icon></i>
                    " "{item.status.as_str().to_uppercase()}
                </div>
            </div>

            <div class="detail-content">
                <div class="detail-header">
                    <h1 class="detail-title">{item.title.clone()}</h1>
                    {item.reward().map(|r| view! { <div class="reward-badge">"Reward: "{r.to_string()}</div> })}
                </div>

                <div class="detail-description">
                    <h3>"Description"</h3>
                    <p>{item.description.clone()}</p>
                </div>

                <div class="detail-info">
                    <div class="info-grid">
                        <InfoRow icon="fas fa-tag" label="Category" value=item.category.label().to_string() />
                        <InfoRow icon="fas fa-map-marker-alt" label="Location" value=item.location.clone() />
                        <InfoRow
                            icon="fas fa-calendar-alt"
                            label="Date & Time"
                            value=long_date_time(&item.date, item.time.as_deref())
                        />
                        <InfoRow icon="fas fa-user" label="Posted by" value=item.posted_by.clone() />
                    </div>
                </div>

                <div class="detail-actions">
                    <button
                        class=if is_lost { "btn btn-primary" } else { "btn btn-secondary" }
                        on:click=move |_| claim_open.set(true)
                    >
                        {if is_lost { "I Think This Is Mine" } else { "This Is My Item" }}
                    </button>
                    <button class="btn btn-outline" on:click=move |_| contact_open.set(true)>
                        <i class="fas fa-envelope"></i>
                        {if is_lost { " Contact Owner" } else { " Contact Finder" }}
                    </button>
                    <button class="btn btn-outline" on:click=share>
                        <i class="fas fa-share-alt"></i>
                        " Share"
                    </button>
                </div>

                <div class="safety-notice">
                    <i class="fas fa-shield-alt"></i>
                    <div>
                        <strong>"Safety Notice:"</strong>
                        <p>"Always meet in public places when exchanging items. Verify ownership before handing over valuable items."</p>
                    </div>
                </div>
            </div>
        </div>

        <ClaimModal item_id=item.id open=claim_open />
        <ContactModal poster=item.posted_by.clone() contact=item.contact.clone() open=contact_open />
    }
}

#[component]
fn InfoRow(icon: &'static str, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="info-item">
            <i class=icon></i>
            <div>
                <strong>{label}</strong>
                <span>{value}</span>
            </div>
        </div>
    }
}

#[component]
fn ClaimModal(item_id: u32, open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let description = RwSignal::new(String::new());
    let contact = RwSignal::new(String::new());

    // Closing clears the form
    Effect::new(move |_| {
        if !open.get() {
            description.set(String::new());
            contact.set(String::new());
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let description = description.get_untracked().trim().to_string();
        let contact = contact.get_untracked().trim().to_string();
        if let Err(e) = validate_claim(&description, &contact) {
            ctx.toast(Toast::error(e.to_string()));
            return;
        }
        let user = store.user().get_untracked();
        spawn_local(async move {
            let claim = ClaimRequest::new(&description, &contact, user.as_ref());
            match commands::claim_item(item_id, &claim).await {
                Ok(_) => {
                    ctx.toast(Toast::success("Claim submitted successfully! The poster will review your claim."));
                    open.set(false);
                }
                Err(e) => ctx.toast(Toast::error(e.user_message("Failed to submit claim"))),
            }
        });
    };

    view! {
        <Modal title="Claim This Item" open=open>
            <form class="claim-form" on:submit=submit>
                <div class="form-group">
                    <label for="claim-description">"Describe the item to prove ownership"</label>
                    <textarea
                        id="claim-description"
                        rows="4"
                        placeholder="Unique marks, contents, serial number..."
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-group">
                    <label for="claim-contact">"Your email"</label>
                    <input
                        type="email"
                        id="claim-contact"
                        prop:value=move || contact.get()
                        on:input=move |ev| contact.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn-primary">"Submit Claim"</button>
            </form>
        </Modal>
    }
}

#[component]
fn ContactModal(poster: String, contact: String, open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let message = RwSignal::new(String::new());

    view! {
        <Modal title="Contact Information" open=open>
            <p><strong>"Posted by: "</strong>{poster.clone()}</p>
            <p><strong>"Contact: "</strong>{contact.clone()}</p>
            <div class="form-group">
                <textarea
                    rows="4"
                    placeholder="Write a message..."
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button
                class="btn btn-primary"
                on:click=move |_| {
                    ctx.toast(Toast::success("Message sent successfully! The poster will contact you soon."));
                    message.set(String::new());
                    open.set(false);
                }
            >
                "Send Message"
            </button>
        </Modal>
    }
}
