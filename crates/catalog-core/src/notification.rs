//! User Notifications
//!
//! Short messages the page surfaces for every remote outcome.

use serde::{Deserialize, Serialize};

pub const LOAD_FAILED: &str = "Failed to load coffees";
pub const ITEM_CREATED: &str = "☕ Coffee added successfully!";
pub const ITEM_UPDATED: &str = "☕ Coffee updated successfully!";
pub const SAVE_FAILED: &str = "Error saving coffee";
pub const ITEM_DELETED: &str = "Coffee deleted";
pub const DELETE_FAILED: &str = "Error deleting coffee";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Sink for notifications (toast system, test recorder, ...)
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}
