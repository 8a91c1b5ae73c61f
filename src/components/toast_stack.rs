//! Toast Stack Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Bottom-right stack of notifications; click to dismiss early
#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || ctx.toasts.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = toast.class();
                    let message = toast.notification.message;
                    view! {
                        <div class=class role="status" on:click=move |_| ctx.toasts.dismiss(id)>
                            {message}
                        </div>
                    }
                }
            />
        </div>
    }
}
