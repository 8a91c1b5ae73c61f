//! Toast Notifications
//!
//! `Notifier` backed by a reactive list; each toast removes itself after the
//! configured delay.

use catalog_core::{Notification, NotificationKind, Notifier};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Oldest toasts are dropped beyond this
pub const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

impl Toast {
    pub fn class(&self) -> &'static str {
        match self.notification.kind {
            NotificationKind::Success => "toast toast-success",
            NotificationKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastList {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastList {
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notification });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[derive(Clone, Copy)]
pub struct ToastQueue {
    list: RwSignal<ToastList>,
    ttl_ms: u32,
}

impl ToastQueue {
    pub fn new(ttl_ms: u32) -> Self {
        Self { list: RwSignal::new(ToastList::default()), ttl_ms }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.list.with(|l| l.toasts().to_vec())
    }

    pub fn dismiss(&self, id: u64) {
        self.list.try_update(|l| l.dismiss(id));
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notification: Notification) {
        tracing::debug!("[TOAST] {:?}: {}", notification.kind, notification.message);
        let Some(id) = self.list.try_update(|l| l.push(notification)) else {
            return;
        };
        let queue = *self;
        spawn_local(async move {
            TimeoutFuture::new(queue.ttl_ms).await;
            queue.dismiss(id);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut list = ToastList::default();
        let a = list.push(Notification::success("Coffee deleted"));
        let b = list.push(Notification::error("Error deleting coffee"));
        assert_ne!(a, b);
        assert_eq!(list.toasts().len(), 2);

        list.dismiss(a);
        assert_eq!(list.toasts().len(), 1);
        assert_eq!(list.toasts()[0].id, b);
        assert_eq!(list.toasts()[0].class(), "toast toast-error");

        // Dismissing twice is harmless
        list.dismiss(a);
        assert_eq!(list.toasts().len(), 1);
    }

    #[test]
    fn test_oldest_dropped_beyond_limit() {
        let mut list = ToastList::default();
        for i in 0..MAX_TOASTS + 2 {
            list.push(Notification::success(format!("#{}", i)));
        }
        let messages: Vec<_> =
            list.toasts().iter().map(|t| t.notification.message.as_str()).collect();
        assert_eq!(messages.len(), MAX_TOASTS);
        assert_eq!(messages[0], "#2");
        assert_eq!(messages[MAX_TOASTS - 1], format!("#{}", MAX_TOASTS + 1));
    }
}
