//! Application Context
//!
//! Shared page state and collaborators provided via Leptos Context API.
//! `dispatch` is the only way the UI changes `PageState`.

use catalog_core::{perform, CatalogConfig, Effect, Event, HttpCatalogRepository, PageState};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::confirm::{ConfirmProvider, DialogConfirm};
use crate::toast::ToastQueue;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Catalog page state; read freely, write through `dispatch`
    pub state: RwSignal<PageState>,
    pub toasts: ToastQueue,
    /// Backs `ConfirmModal`; only consulted when config picks the dialog
    pub dialog: DialogConfirm,
    confirm: ConfirmProvider,
    /// One client for the page's lifetime
    repository: StoredValue<HttpCatalogRepository, LocalStorage>,
}

impl AppContext {
    pub fn new(config: &CatalogConfig) -> Self {
        let dialog = DialogConfirm::new();
        Self {
            state: RwSignal::new(PageState::new()),
            toasts: ToastQueue::new(config.toast_ttl_ms),
            dialog,
            confirm: ConfirmProvider::for_style(config.confirm_style, dialog),
            repository: StoredValue::new_local(HttpCatalogRepository::new(
                config.api_base_url.clone(),
            )),
        }
    }

    /// Apply an event and start whatever effects it produces
    pub fn dispatch(&self, event: Event) {
        let effects = self.state.try_update(|s| s.apply(event)).unwrap_or_default();
        for effect in effects {
            self.run(effect);
        }
    }

    /// Each effect is its own task; completions come back through `dispatch`
    /// in whatever order the network delivers them.
    fn run(&self, effect: Effect) {
        let ctx = *self;
        spawn_local(async move {
            let repo = ctx.repository.get_value();
            if let Some(next) = perform(&repo, &ctx.confirm, &ctx.toasts, effect).await {
                ctx.dispatch(next);
            }
        });
    }
}
