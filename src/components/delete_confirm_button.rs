//! Delete Confirm Button Component
//!
//! Inline delete confirmation: the first click asks, the second one deletes.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a trash button initially. When clicked, shows "Delete?" with confirm/cancel.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class=button_class.clone()
                title="Delete"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                <i class="fas fa-trash"></i>
                " Delete"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="btn btn-danger btn-small"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    <i class="fas fa-check"></i>
                </button>
                <button
                    class="btn btn-outline btn-small"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    <i class="fas fa-times"></i>
                </button>
            </span>
        </Show>
    }
}
