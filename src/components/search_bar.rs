//! Search Bar Component

use catalog_core::Event;
use leptos::prelude::*;

use crate::context::AppContext;

/// Free-text search over title, description and ingredients.
/// Every keystroke refilters; there is no debounce.
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="search">
            <span class="search-icon">"🔍"</span>
            <input
                type="text"
                placeholder="Search coffees..."
                prop:value=move || ctx.state.with(|s| s.search_text.clone())
                on:input=move |ev| ctx.dispatch(Event::SearchChanged(event_target_value(&ev)))
            />
        </div>
    }
}
