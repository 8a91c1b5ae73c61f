//! Delete Confirmation Providers
//!
//! Two ways to answer `ConfirmationProvider::confirm`: the browser's
//! blocking prompt, or the in-page `ConfirmModal`. Config picks one.

use async_trait::async_trait;
use catalog_core::{ConfirmStyle, ConfirmationProvider};
use futures::channel::oneshot;
use leptos::prelude::*;

/// `window.confirm`
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeConfirm;

#[async_trait(?Send)]
impl ConfirmationProvider for NativeConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        window().confirm_with_message(prompt).unwrap_or(false)
    }
}

/// In-page dialog. `confirm` opens it and waits for `answer`.
#[derive(Clone, Copy)]
pub struct DialogConfirm {
    prompt: RwSignal<Option<String>>,
    responder: StoredValue<Option<oneshot::Sender<bool>>>,
}

impl DialogConfirm {
    pub fn new() -> Self {
        Self {
            prompt: RwSignal::new(None),
            responder: StoredValue::new(None),
        }
    }

    /// Question currently on screen, if the dialog is open
    pub fn prompt(&self) -> Option<String> {
        self.prompt.get()
    }

    pub fn answer(&self, confirmed: bool) {
        if let Some(Some(responder)) = self.responder.try_update_value(|slot| slot.take()) {
            let _ = responder.send(confirmed);
        }
        self.prompt.set(None);
    }
}

#[async_trait(?Send)]
impl ConfirmationProvider for DialogConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        let (tx, rx) = oneshot::channel();
        // A newer request supersedes one still on screen
        if let Some(Some(previous)) = self.responder.try_update_value(|slot| slot.replace(tx)) {
            let _ = previous.send(false);
        }
        self.prompt.set(Some(prompt.to_string()));
        // Dropped sender (page torn down) counts as "no"
        rx.await.unwrap_or(false)
    }
}

/// The provider selected by config
#[derive(Clone, Copy)]
pub enum ConfirmProvider {
    Native(NativeConfirm),
    Dialog(DialogConfirm),
}

impl ConfirmProvider {
    pub fn for_style(style: ConfirmStyle, dialog: DialogConfirm) -> Self {
        match style {
            ConfirmStyle::Native => ConfirmProvider::Native(NativeConfirm),
            ConfirmStyle::Dialog => ConfirmProvider::Dialog(dialog),
        }
    }
}

#[async_trait(?Send)]
impl ConfirmationProvider for ConfirmProvider {
    async fn confirm(&self, prompt: &str) -> bool {
        match self {
            ConfirmProvider::Native(native) => native.confirm(prompt).await,
            ConfirmProvider::Dialog(dialog) => dialog.confirm(prompt).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_answer_resolves_pending_request() {
        let owner = Owner::new();
        owner.set();
        let dialog = DialogConfirm::new();

        block_on(async {
            let mut request = Box::pin(dialog.confirm("Delete Latte?"));
            assert!(futures::poll!(&mut request).is_pending());
            assert_eq!(dialog.prompt().as_deref(), Some("Delete Latte?"));

            dialog.answer(true);
            assert!(request.await);
        });
        assert_eq!(dialog.prompt(), None);
    }

    #[test]
    fn test_newer_request_supersedes_older() {
        let owner = Owner::new();
        owner.set();
        let dialog = DialogConfirm::new();

        block_on(async {
            let mut first = Box::pin(dialog.confirm("first?"));
            let mut second = Box::pin(dialog.confirm("second?"));
            assert!(futures::poll!(&mut first).is_pending());
            assert!(futures::poll!(&mut second).is_pending());
            assert_eq!(dialog.prompt().as_deref(), Some("second?"));

            dialog.answer(true);
            assert_eq!((first.await, second.await), (false, true));
        });
        assert_eq!(dialog.prompt(), None);
    }

    #[test]
    fn test_cancel_answers_no() {
        let owner = Owner::new();
        owner.set();
        let dialog = DialogConfirm::new();

        block_on(async {
            let mut request = Box::pin(dialog.confirm("Delete Mocha?"));
            assert!(futures::poll!(&mut request).is_pending());
            dialog.answer(false);
            assert!(!request.await);
        });
        assert_eq!(dialog.prompt(), None);
    }

    #[test]
    fn test_answer_without_request_is_harmless() {
        let owner = Owner::new();
        owner.set();
        let dialog = DialogConfirm::new();

        dialog.answer(true);
        assert_eq!(dialog.prompt(), None);
    }

    #[test]
    fn test_for_style() {
        let owner = Owner::new();
        owner.set();
        let dialog = DialogConfirm::new();

        assert!(matches!(
            ConfirmProvider::for_style(ConfirmStyle::Native, dialog),
            ConfirmProvider::Native(_)
        ));
        assert!(matches!(
            ConfirmProvider::for_style(ConfirmStyle::Dialog, dialog),
            ConfirmProvider::Dialog(_)
        ));
    }

    #[test]
    fn test_dialog_provider_delegates() {
        let owner = Owner::new();
        owner.set();
        let dialog = DialogConfirm::new();
        let provider = ConfirmProvider::for_style(ConfirmStyle::Dialog, dialog);

        block_on(async {
            let mut request = Box::pin(provider.confirm("Delete Latte?"));
            assert!(futures::poll!(&mut request).is_pending());
            assert_eq!(dialog.prompt().as_deref(), Some("Delete Latte?"));
            dialog.answer(true);
            assert!(request.await);
        });
    }
}
