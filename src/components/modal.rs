//! Modal Component
//!
//! Overlay dialog. Clicking the backdrop or the close button hides it.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    open: RwSignal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal show" on:click=move |_| open.set(false)>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>{title.clone()}</h2>
                        <button class="close-modal" on:click=move |_| open.set(false)>
                            <i class="fas fa-times"></i>
                        </button>
                    </div>
                    <div class="modal-body">
                        {children()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
