//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use findit_core::api::RegisterRequest;
use findit_core::validate::RegisterForm;
use findit_core::Toast;

use crate::commands;
use crate::components::PasswordField;
use crate::context::{use_app_context, Page};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let terms = RwSignal::new(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = RegisterForm {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            phone: phone.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
            terms: terms.get_untracked(),
        };
        if let Err(e) = form.validate() {
            ctx.toast(Toast::error(e.to_string()));
            return;
        }

        ctx.toast(Toast::info("Creating your account..."));
        spawn_local(async move {
            let request = RegisterRequest {
                name: &form.name,
                email: &form.email,
                phone: &form.phone,
                password: &form.password,
            };
            match commands::register(&request).await {
                Ok(_) => {
                    ctx.toast(Toast::success("Registration successful! Please log in."));
                    ctx.navigate(Page::Login);
                }
                Err(e) => ctx.toast(Toast::error(e.user_message("Registration failed"))),
            }
        });
    };

    let text_field = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type=kind
                    id=id
                    class="form-control"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <section class="auth-section">
            <div class="auth-card">
                <div class="auth-header">
                    <h1>"Create Account"</h1>
                    <p>"Join the community and help reunite lost items"</p>
                </div>
                <form id="register-form" class="auth-form" on:submit=submit>
                    {text_field("name", "Full Name *", "text", name)}
                    {text_field("email", "Email *", "email", email)}
                    {text_field("phone", "Phone", "tel", phone)}
                    <div class="form-group">
                        <label for="password">"Password *"</label>
                        <PasswordField id="password" placeholder="At least 6 characters" value=password />
                    </div>
                    <div class="form-group">
                        <label for="confirm-password">"Confirm Password *"</label>
                        <PasswordField id="confirm-password" placeholder="Repeat your password" value=confirm />
                    </div>
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || terms.get()
                            on:change=move |ev| terms.set(event_target_checked(&ev))
                        />
                        " I agree to the Terms & Privacy Policy"
                    </label>
                    <button type="submit" class="btn btn-primary btn-full">"Create Account"</button>
                </form>
                <p class="auth-switch">
                    "Already have an account? "
                    <a href="#" on:click=move |ev| { ev.prevent_default(); ctx.navigate(Page::Login); }>"Sign in"</a>
                </p>
            </div>
        </section>
    }
}
