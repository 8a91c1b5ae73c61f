//! Coffee Catalog App
//!
//! Single page: header with search and "Add Coffee", the card grid, and the
//! editor/confirmation overlays.

use catalog_core::{CatalogConfig, CatalogItem, Event};
use leptos::prelude::*;

use crate::components::{
    ConfirmModal, EmptyState, ItemCard, ItemEditor, Loader, SearchBar, ToastStack,
};
use crate::context::AppContext;

#[component]
pub fn App(config: CatalogConfig) -> impl IntoView {
    let ctx = AppContext::new(&config);
    provide_context(ctx);

    // Load once on mount
    Effect::new(move |_| ctx.dispatch(Event::Load));

    let is_loading = Memo::new(move |_| ctx.state.with(|s| s.is_loading));
    let editor_open = Memo::new(move |_| ctx.state.with(|s| s.editor_open));
    let visible = Memo::new(move |_| ctx.state.with(|s| s.filtered_items.clone()));
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <div class="page">
            <header class="page-header">
                <div class="brand">
                    <span class="brand-icon">"☕"</span>
                    <h1>"Coffee Explorer"</h1>
                </div>
                <div class="header-actions">
                    <SearchBar />
                    <button class="btn btn-primary" on:click=move |_| ctx.dispatch(Event::OpenCreate)>
                        "+ Add Coffee"
                    </button>
                </div>
            </header>

            <main class="page-main">
                <Show when=move || editor_open.get()>
                    <ItemEditor />
                </Show>

                {move || {
                    if is_loading.get() {
                        view! { <Loader /> }.into_any()
                    } else if visible.with(|items| items.is_empty()) {
                        view! { <EmptyState /> }.into_any()
                    } else {
                        view! { <CatalogGrid items=visible.get() /> }.into_any()
                    }
                }}
            </main>

            <ConfirmModal />
            <ToastStack />

            <footer class="page-footer">
                <p>{format!("☕ Enjoy your coffee journey! · {}", year)}</p>
            </footer>
        </div>
    }
}

/// Card grid; wires card triggers to controller events
#[component]
fn CatalogGrid(items: Vec<CatalogItem>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="card-grid">
            {items.into_iter().map(|item| {
                let edit_id = item.id.clone();
                let delete_id = item.id.clone();
                view! {
                    <ItemCard
                        item=item
                        on_edit=Callback::new(move |_: ()| ctx.dispatch(Event::OpenEdit(edit_id.clone())))
                        on_delete=Callback::new(move |_: ()| ctx.dispatch(Event::DeleteRequested(delete_id.clone())))
                    />
                }
            }).collect_view()}
        </div>
    }
}
