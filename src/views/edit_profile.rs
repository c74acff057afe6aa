//! Edit Profile Page
//!
//! Profile fields, notification and privacy prefs, and account deletion.

use leptos::prelude::*;
use leptos::task::spawn_local;
use findit_core::session::ProfileUpdate;
use findit_core::validate::{confirm_delete, validate_profile, DELETE_CONFIRMATION};
use findit_core::Toast;

use crate::commands;
use crate::components::Modal;
use crate::context::{use_app_context, Page};
use crate::storage::session_store;
use crate::store::{store_logout, use_app_store, AppStateStoreFields};

#[component]
pub fn EditProfilePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let Some(user) = store.user().get_untracked() else {
        Effect::new(move |_| ctx.navigate(Page::Login));
        return view! { <div class="loading-state"><p>"Redirecting to login..."</p></div> }.into_any();
    };

    let form = RwSignal::new(ProfileUpdate::from_session(&user));
    let errors = RwSignal::new(Vec::<(&'static str, String)>::new());
    let delete_open = RwSignal::new(false);
    let delete_phrase = RwSignal::new(String::new());

    let error_for = move |field: &'static str| {
        move || {
            errors.with(|errs| {
                errs.iter()
                    .find(|(name, _)| *name == field)
                    .map(|(_, message)| view! { <div class="field-error">{message.clone()}</div> })
            })
        }
    };
    let clear_error = move |field: &'static str| errors.update(|errs| errs.retain(|(name, _)| *name != field));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let update = form.get_untracked();
        let problems = validate_profile(&update.name, &update.email);
        if !problems.is_empty() {
            errors.set(problems.into_iter().map(|(field, e)| (field, e.to_string())).collect());
            return;
        }
        let Some(current) = store.user().get_untracked() else {
            ctx.toast(Toast::error("You must be logged in to save changes"));
            return;
        };
        spawn_local(async move {
            match commands::update_profile(current.id, &update).await {
                Ok(_) => {
                    let merged = update.merge_into(&current);
                    if let Err(e) = session_store().update(&merged) {
                        log::error!("[EditProfile] session not updated: {}", e);
                    }
                    store.user().set(Some(merged));
                    ctx.toast(Toast::success("Profile updated successfully!"));
                    ctx.navigate(Page::Profile);
                }
                Err(e) => ctx.toast(Toast::error(e.user_message("Failed to update profile"))),
            }
        });
    };

    let cancel = move |_| {
        let unsaved = store.user().with_untracked(|u| {
            u.as_ref().map_or(false, |u| form.with_untracked(|f| f.differs_from(u)))
        });
        let leave = !unsaved
            || web_sys::window()
                .and_then(|w| w.confirm_with_message("You have unsaved changes. Are you sure you want to leave?").ok())
                .unwrap_or(false);
        if leave {
            ctx.navigate(Page::Profile);
        }
    };

    let delete_account = move |_| {
        if let Err(e) = confirm_delete(&delete_phrase.get_untracked()) {
            ctx.toast(Toast::error(e.to_string()));
            return;
        }
        store_logout(&store);
        delete_open.set(false);
        ctx.toast(Toast::success("Account deleted successfully"));
        ctx.navigate(Page::Home);
    };

    Effect::new(move |_| {
        if !delete_open.get() {
            delete_phrase.set(String::new());
        }
    });

    view! {
        <section class="edit-profile-section">
            <h1>"Edit Profile"</h1>
            <form id="edit-profile-form" class="profile-form" on:submit=submit>
                <div class="form-section">
                    <h2>"Personal Information"</h2>
                    <div class="form-group">
                        <label for="fullName">"Full Name"</label>
                        <input
                            type="text"
                            id="fullName"
                            class=move || if errors.with(|e| e.iter().any(|(f, _)| *f == "name")) { "form-control error" } else { "form-control" }
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| {
                                form.update(|f| f.name = event_target_value(&ev));
                                clear_error("name");
                            }
                        />
                        {error_for("name")}
                    </div>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            class=move || if errors.with(|e| e.iter().any(|(f, _)| *f == "email")) { "form-control error" } else { "form-control" }
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| {
                                form.update(|f| f.email = event_target_value(&ev));
                                clear_error("email");
                            }
                        />
                        {error_for("email")}
                    </div>
                    <div class="form-group">
                        <label for="phone">"Phone"</label>
                        <input
                            type="tel"
                            id="phone"
                            class="form-control"
                            prop:value=move || form.with(|f| f.phone.clone())
                            on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="location">"Location"</label>
                        <input
                            type="text"
                            id="location"
                            class="form-control"
                            prop:value=move || form.with(|f| f.location.clone())
                            on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="bio">"Bio"</label>
                        <textarea
                            id="bio"
                            rows="3"
                            class="form-control"
                            prop:value=move || form.with(|f| f.bio.clone())
                            on:input=move |ev| form.update(|f| f.bio = event_target_value(&ev))
                        ></textarea>
                    </div>
                </div>

                <div class="form-section">
                    <h2>"Notifications"</h2>
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.notifications.email)
                            on:change=move |ev| form.update(|f| f.notifications.email = event_target_checked(&ev))
                        />
                        " Email notifications"
                    </label>
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.notifications.sms)
                            on:change=move |ev| form.update(|f| f.notifications.sms = event_target_checked(&ev))
                        />
                        " SMS notifications"
                    </label>
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.notifications.stories)
                            on:change=move |ev| form.update(|f| f.notifications.stories = event_target_checked(&ev))
                        />
                        " Success stories"
                    </label>
                </div>

                <div class="form-section">
                    <h2>"Privacy"</h2>
                    <div class="form-group">
                        <label for="profileVisibility">"Profile visibility"</label>
                        <select
                            id="profileVisibility"
                            class="form-control"
                            prop:value=move || form.with(|f| f.privacy.visibility.clone())
                            on:change=move |ev| form.update(|f| f.privacy.visibility = event_target_value(&ev))
                        >
                            <option value="public">"Public"</option>
                            <option value="members">"Members only"</option>
                            <option value="private">"Private"</option>
                        </select>
                    </div>
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.privacy.show_phone)
                            on:change=move |ev| form.update(|f| f.privacy.show_phone = event_target_checked(&ev))
                        />
                        " Show phone number on my items"
                    </label>
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">"Save Changes"</button>
                    <button type="button" class="btn btn-outline" on:click=cancel>"Cancel"</button>
                </div>
            </form>

            <div class="danger-zone">
                <h2>"Danger Zone"</h2>
                <button class="btn btn-danger" on:click=move |_| delete_open.set(true)>
                    <i class="fas fa-trash"></i>
                    " Delete Account"
                </button>
            </div>

            <Modal title="Delete Account" open=delete_open>
                <p>{format!("This cannot be undone. Type \"{}\" to confirm.", DELETE_CONFIRMATION)}</p>
                <input
                    type="text"
                    id="deleteConfirmation"
                    class="form-control"
                    prop:value=move || delete_phrase.get()
                    on:input=move |ev| delete_phrase.set(event_target_value(&ev))
                />
                <button
                    id="confirmDeleteBtn"
                    class="btn btn-danger"
                    disabled=move || delete_phrase.with(|p| p != DELETE_CONFIRMATION)
                    on:click=delete_account
                >
                    "Delete My Account"
                </button>
            </Modal>
        </section>
    }
    .into_any()
}
