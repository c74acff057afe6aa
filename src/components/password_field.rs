//! Password Field Component
//!
//! Password input with a show/hide eye toggle.

use leptos::prelude::*;

#[component]
pub fn PasswordField(
    #[prop(into)] id: String,
    #[prop(into)] placeholder: String,
    value: RwSignal<String>,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <div class="password-input">
            <input
                id=id
                type=move || if visible.get() { "text" } else { "password" }
                class="form-control"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                type="button"
                class="password-toggle"
                on:click=move |_| set_visible.update(|v| *v = !*v)
            >
                <i class=move || if visible.get() { "fas fa-eye-slash" } else { "fas fa-eye" }></i>
            </button>
        </div>
    }
}
