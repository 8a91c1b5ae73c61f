//! Confirm Modal Component
//!
//! Yes/no overlay driven by `DialogConfirm`. Stays hidden when config picks
//! the native prompt, since nothing ever opens it.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ConfirmModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let dialog = ctx.dialog;

    view! {
        <Show when=move || dialog.prompt().is_some()>
            <div class="overlay">
                <div class="modal" role="dialog" aria-modal="true">
                    <h2>"Delete Confirmation"</h2>
                    <p>{move || dialog.prompt().unwrap_or_default()}</p>
                    <div class="modal-actions">
                        <button class="btn btn-secondary" on:click=move |_| dialog.answer(false)>
                            "Cancel"
                        </button>
                        <button class="btn btn-danger" on:click=move |_| dialog.answer(true)>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
