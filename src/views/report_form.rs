//! Report Lost / Report Found Page
//!
//! One form for both directions. Lost reports carry a reward; found reports
//! say where the item is being kept.

use leptos::prelude::*;
use leptos::task::spawn_local;
use findit_core::format::megabytes;
use findit_core::validate::{validate_image, CurrentLocation, ReportForm, ValidationError};
use findit_core::{Category, ItemStatus, Toast};

use crate::commands::{self, ImageUpload};
use crate::context::{use_app_context, AppContext, Page};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::timers::local_now;

#[component]
pub fn ReportFormPage(status: ItemStatus) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let is_lost = status == ItemStatus::Lost;
    let today = local_now().date().format("%Y-%m-%d").to_string();

    let form = RwSignal::new(ReportForm { date: today.clone(), ..Default::default() });
    let image = RwSignal::new(None::<ImageUpload>);
    let missing = RwSignal::new(Vec::<&'static str>::new());
    let drag_over = RwSignal::new(false);
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        if store.user().with_untracked(Option::is_none) {
            let kind = if is_lost { "lost" } else { "found" };
            ctx.toast(Toast::error(format!("You must be logged in to report a {} item", kind)));
            ctx.navigate(Page::Login);
        }
    });

    let field_class = move |name: &'static str| {
        move || if missing.with(|m| m.contains(&name)) { "form-control field-error" } else { "form-control" }
    };

    let on_file = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            accept_file(file, image, ctx);
        }
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        drag_over.set(false);
        if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0)) {
            accept_file(file, image, ctx);
        }
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        if let Err(e) = current.validate() {
            if let ValidationError::MissingReportFields(fields) = &e {
                missing.set(fields.clone());
            }
            ctx.toast(Toast::error(e.to_string()));
            return;
        }
        missing.set(Vec::new());

        let user_id = store.user().with_untracked(|u| u.as_ref().map(|u| u.id));
        let upload = image.get_untracked();
        set_submitting.set(true);
        spawn_local(async move {
            match commands::submit_report(status, &current, upload, user_id).await {
                Ok(ack) => {
                    let message = ack.message.unwrap_or_else(|| "Item reported successfully".to_string());
                    ctx.toast(Toast::success(message));
                    form.set(ReportForm { date: current.date.clone(), ..Default::default() });
                    image.set(None);
                    ctx.navigate(Page::Browse);
                }
                Err(e) => ctx.toast(Toast::error(e.user_message("Failed to report item"))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="report-section">
            <div class="report-header">
                <h1>{if is_lost { "Report a Lost Item" } else { "Report a Found Item" }}</h1>
                <p>{if is_lost {
                    "Tell the community what you lost and where you last saw it."
                } else {
                    "Help reunite a found item with its owner."
                }}</p>
            </div>

            <form class="report-form" on:submit=submit>
                <div class="form-group">
                    <label for="item-name">"Item Name *"</label>
                    <input
                        type="text"
                        id="item-name"
                        class=field_class("itemName")
                        placeholder="e.g. Brown Leather Wallet"
                        prop:value=move || form.with(|f| f.item_name.clone())
                        on:input=move |ev| form.update(|f| f.item_name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="category">"Category *"</label>
                    <select
                        id="category"
                        class=field_class("category")
                        prop:value=move || form.with(|f| f.category.clone())
                        on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                    >
                        <option value="">"Select a category"</option>
                        {Category::ALL
                            .iter()
                            .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="description">"Description *"</label>
                    <textarea
                        id="description"
                        rows="4"
                        class=field_class("description")
                        placeholder="Color, brand, distinguishing marks..."
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="location">{if is_lost { "Where did you lose it? *" } else { "Where did you find it? *" }}</label>
                    <input
                        type="text"
                        id="location"
                        class=field_class("location")
                        prop:value=move || form.with(|f| f.location.clone())
                        on:input=move |ev| {
                            let location = event_target_value(&ev);
                            form.update(|f| {
                                f.current_location = CurrentLocation::suggest(&location);
                                f.location = location;
                            });
                        }
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="date">"Date *"</label>
                        <input
                            type="date"
                            id="date"
                            max=today
                            class=field_class("date")
                            prop:value=move || form.with(|f| f.date.clone())
                            on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="time">"Time"</label>
                        <input
                            type="time"
                            id="time"
                            class="form-control"
                            prop:value=move || form.with(|f| f.time.clone())
                            on:input=move |ev| form.update(|f| f.time = event_target_value(&ev))
                        />
                    </div>
                </div>

                {if is_lost {
                    view! {
                        <div class="form-group">
                            <label for="reward">"Reward (optional)"</label>
                            <input
                                type="text"
                                id="reward"
                                class="form-control"
                                placeholder="e.g. $50"
                                prop:value=move || form.with(|f| f.reward.clone())
                                on:input=move |ev| form.update(|f| f.reward = event_target_value(&ev))
                            />
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="form-group">
                            <label for="current-location">"Where is the item now?"</label>
                            <select
                                id="current-location"
                                class="form-control"
                                prop:value=move || form.with(|f| f.current_location.as_str())
                                on:change=move |ev| {
                                    form.update(|f| f.current_location = CurrentLocation::parse(&event_target_value(&ev)))
                                }
                            >
                                {CurrentLocation::ALL
                                    .iter()
                                    .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                    }
                    .into_any()
                }}

                <div class="form-group">
                    <label for="contact-info">"Contact Information *"</label>
                    <input
                        type="text"
                        id="contact-info"
                        class=field_class("contactInfo")
                        placeholder="Email or phone"
                        prop:value=move || form.with(|f| f.contact_info.clone())
                        on:input=move |ev| form.update(|f| f.contact_info = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="additional-info">"Additional Information"</label>
                    <textarea
                        id="additional-info"
                        rows="3"
                        class="form-control"
                        prop:value=move || form.with(|f| f.additional_info.clone())
                        on:input=move |ev| form.update(|f| f.additional_info = event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group">
                    <label>"Photo"</label>
                    <label
                        class=move || if drag_over.get() { "file-upload-area drag-over" } else { "file-upload-area" }
                        on:dragover=move |ev: web_sys::DragEvent| {
                            ev.prevent_default();
                            drag_over.set(true);
                        }
                        on:dragleave=move |_| drag_over.set(false)
                        on:drop=on_drop
                    >
                        <input type="file" id="item-image" accept="image/png,image/jpeg,image/gif" style="display:none" on:change=on_file />
                        {move || match image.get() {
                            Some(upload) => view! {
                                <i class="fas fa-check-circle"></i>
                                <p><strong>{upload.file_name.clone()}</strong></p>
                                <small>{format!("{} uploaded", megabytes(upload.bytes.len() as u64))}</small>
                            }
                            .into_any(),
                            None => view! {
                                <i class="fas fa-cloud-upload-alt"></i>
                                <p>"Click to upload or drag and drop"</p>
                                <small>"PNG, JPG up to 5MB"</small>
                            }
                            .into_any(),
                        }}
                    </label>
                </div>

                <button type="submit" class="btn btn-primary btn-full" disabled=move || submitting.get()>
                    {move || if submitting.get() {
                        view! { <i class="fas fa-spinner fa-spin"></i>" Submitting..." }.into_any()
                    } else {
                        view! { <i class="fas fa-paper-plane"></i>" Submit Report" }.into_any()
                    }}
                </button>
            </form>
        </section>
    }
}

/// Check type/size, then read the file into memory for the multipart body
fn accept_file(file: web_sys::File, image: RwSignal<Option<ImageUpload>>, ctx: AppContext) {
    if let Err(e) = validate_image(&file.type_(), file.size() as u64) {
        ctx.toast(Toast::error(e.to_string()));
        return;
    }
    spawn_local(async move {
        match ImageUpload::read(&file).await {
            Ok(upload) => image.set(Some(upload)),
            Err(e) => {
                log::error!("[Report] reading {} failed: {}", file.name(), e);
                ctx.toast(Toast::error("Could not read the selected image"));
            }
        }
    });
}
