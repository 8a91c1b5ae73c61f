//! Empty State Component
//!
//! Shown when nothing is visible: either the search matched nothing or the
//! catalog itself is empty.

use catalog_core::Event;
use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn EmptyState() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let searching = Memo::new(move |_| ctx.state.with(|s| !s.search_text.is_empty()));

    view! {
        <div class="empty-state">
            <div class="empty-icon">"☕"</div>
            <h3>{move || if searching.get() { "No matching coffees found" } else { "No coffees available" }}</h3>
            <p>
                {move || if searching.get() { "Try a different search term" } else { "Add your first coffee to get started" }}
            </p>
            <Show when=move || !searching.get()>
                <button class="btn btn-primary" on:click=move |_| ctx.dispatch(Event::OpenCreate)>
                    "Create Coffee"
                </button>
            </Show>
        </div>
    }
}
