//! Headless Driver
//!
//! Owns a `PageState` and runs every effect of a dispatched event, and of
//! the events those produce, to completion in FIFO order.
//!
//! This is the harness for tests and non-browser hosts. The browser app
//! runs the same `apply`/`perform` loop through `spawn_local` tasks in its
//! `AppContext`, where completions arrive in network order instead.

use std::collections::VecDeque;

use super::effects::{perform, ConfirmationProvider};
use super::state::{Event, PageState};
use crate::notification::Notifier;
use crate::repository::CatalogRepository;

pub struct Driver<R, C, N> {
    state: PageState,
    repo: R,
    confirm: C,
    notifier: N,
}

impl<R, C, N> Driver<R, C, N>
where
    R: CatalogRepository,
    C: ConfirmationProvider,
    N: Notifier,
{
    pub fn new(repo: R, confirm: C, notifier: N) -> Self {
        Self { state: PageState::new(), repo, confirm, notifier }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Apply `event` and settle everything it sets in motion
    pub async fn dispatch(&mut self, event: Event) {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            for effect in self.state.apply(event) {
                let next = perform(&self.repo, &self.confirm, &self.notifier, effect).await;
                if let Some(next) = next {
                    queue.push_back(next);
                }
            }
        }
    }
}
