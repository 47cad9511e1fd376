//! Confirm Dialog Component
//!
//! Reusable modal confirmation with confirm/cancel actions.

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_cancel.run(()) />
        <div class="modal confirm-dialog">
            <h3>{title}</h3>
            <p>{message}</p>
            <div class="dialog-actions">
                <button class="secondary-btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="danger-btn" on:click=move |_| on_confirm.run(())>
                    {confirm_label}
                </button>
            </div>
        </div>
    }
}
