//! Effect Execution
//!
//! Runs one `Effect` against the collaborators and reports the outcome as
//! the event to dispatch next.

use async_trait::async_trait;

use super::state::{Effect, Event, SaveKind, DELETE_PROMPT};
use crate::notification::Notifier;
use crate::repository::CatalogRepository;

/// Yes/no gate before a destructive action
///
/// The page does not care whether the answer comes from a native prompt or
/// an in-page dialog.
#[async_trait(?Send)]
pub trait ConfirmationProvider {
    async fn confirm(&self, prompt: &str) -> bool;
}

#[async_trait(?Send)]
impl<C: ConfirmationProvider + ?Sized> ConfirmationProvider for &C {
    async fn confirm(&self, prompt: &str) -> bool {
        (**self).confirm(prompt).await
    }
}

/// Carry out `effect`. Returns the completion event, if the effect has one.
pub async fn perform<R, C, N>(repo: &R, confirm: &C, notifier: &N, effect: Effect) -> Option<Event>
where
    R: CatalogRepository + ?Sized,
    C: ConfirmationProvider + ?Sized,
    N: Notifier + ?Sized,
{
    match effect {
        Effect::FetchAll => Some(Event::LoadFinished(repo.list().await)),
        Effect::Create(payload) => {
            let result = repo.create(&payload).await.map(|_| ());
            Some(Event::SaveFinished { kind: SaveKind::Create, result })
        }
        Effect::Update(id, payload) => {
            let result = repo.update(&id, &payload).await;
            Some(Event::SaveFinished { kind: SaveKind::Update, result })
        }
        Effect::Delete(id) => {
            let result = repo.delete(&id).await;
            Some(Event::DeleteFinished { id, result })
        }
        Effect::Confirm(id) => {
            if confirm.confirm(DELETE_PROMPT).await {
                Some(Event::DeleteConfirmed(id))
            } else {
                Some(Event::DeleteCancelled(id))
            }
        }
        Effect::Notify(notification) => {
            notifier.notify(notification);
            None
        }
    }
}
