use leptos::prelude::*;

/// Spinner shown while the catalog loads
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader-wrap">
            <div class="loader" role="status" aria-label="Loading"></div>
        </div>
    }
}
