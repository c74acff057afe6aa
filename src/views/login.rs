//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use chrono::{SecondsFormat, Utc};
use findit_core::session::StorageScope;
use findit_core::validate::validate_login;
use findit_core::Toast;

use crate::commands;
use crate::components::PasswordField;
use crate::context::{use_app_context, Page};
use crate::storage::session_store;
use crate::store::{store_login, use_app_store};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked().trim().to_string();
        let password = password.get_untracked();
        if let Err(e) = validate_login(&email, &password) {
            ctx.toast(Toast::error(e.to_string()));
            return;
        }

        let remember = remember_me.get_untracked();
        ctx.toast(Toast::info("Signing you in..."));
        spawn_local(async move {
            match commands::login(&email, &password).await {
                Ok(mut user) => {
                    user.login_time = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
                    user.remember_me = remember;
                    if let Err(e) = session_store().login(&user, StorageScope::for_remember_me(remember)) {
                        log::error!("[Login] session not stored: {}", e);
                        ctx.toast(Toast::error("Could not save your session. Check that browser storage is enabled."));
                        return;
                    }
                    log::info!("[Login] signed in as user {}", user.id);
                    store_login(&store, user);
                    ctx.toast(Toast::success("Login successful! Redirecting..."));
                    ctx.navigate(Page::Home);
                }
                Err(e) => ctx.toast(Toast::error(e.user_message("Login failed"))),
            }
        });
    };

    view! {
        <section class="auth-section">
            <div class="auth-card">
                <div class="auth-header">
                    <h1>"Welcome Back"</h1>
                    <p>"Sign in to manage your reports"</p>
                </div>
                <form id="login-form" class="auth-form" on:submit=submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            class="form-control"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <PasswordField id="password" placeholder="Your password" value=password />
                    </div>
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || remember_me.get()
                            on:change=move |ev| remember_me.set(event_target_checked(&ev))
                        />
                        " Remember me"
                    </label>
                    <button type="submit" class="btn btn-primary btn-full">"Sign In"</button>
                </form>
                <p class="auth-switch">
                    "Don't have an account? "
                    <a href="#" on:click=move |ev| { ev.prevent_default(); ctx.navigate(Page::Register); }>"Sign up"</a>
                </p>
            </div>
        </section>
    }
}
