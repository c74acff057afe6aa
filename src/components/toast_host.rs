//! Toast Host Component
//!
//! Renders the current toast and dismisses it after 4 s. A newer toast
//! restarts the timer.

use leptos::prelude::*;
use findit_core::toast::TOAST_DURATION_MS;

use crate::context::use_app_context;
use crate::timers::Debouncer;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();
    let auto_dismiss = Debouncer::new(TOAST_DURATION_MS);

    Effect::new(move |_| {
        if ctx.toast.with(Option::is_some) {
            auto_dismiss.call(move || ctx.dismiss_toast());
        } else {
            auto_dismiss.cancel();
        }
    });

    move || {
        ctx.toast.get().map(|toast| {
            view! {
                <div id="toast" class=toast.kind.class()>
                    <i class=toast.kind.icon()></i>
                    <span class="toast-message">{toast.message}</span>
                    <button class="toast-close" on:click=move |_| ctx.dismiss_toast()>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
            }
        })
    }
}
