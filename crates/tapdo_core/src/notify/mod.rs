//! Transient user-facing notification surface.
//!
//! # Responsibility
//! - Describe short-lived messages (validation feedback, storage errors).
//! - Buffer them for the UI layer, which owns actual toast rendering.
//!
//! # Invariants
//! - Notifications are fire-and-forget: no acknowledgement, no programmatic
//!   consumption beyond display.
//! - The core never blocks on notification delivery.

use std::cell::RefCell;
use std::collections::VecDeque;

/// Default snackbar background used by the screen.
pub const NOTIFY_BACKGROUND: &str = "#50C878";
/// Default snackbar text color used by the screen.
pub const NOTIFY_TEXT_COLOR: &str = "#000";

/// Display duration class for a transient notification.
///
/// Only the short class exists today; kept as an enum because the wire
/// shape toward the UI is an enum on the platform side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyDuration {
    Short,
}

/// One short-lived, non-blocking, non-queryable user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub duration: NotifyDuration,
    pub background_color: String,
    pub text_color: String,
}

impl Notification {
    /// Builds a short notification with the screen's default palette.
    pub fn short(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            duration: NotifyDuration::Short,
            background_color: NOTIFY_BACKGROUND.to_string(),
            text_color: NOTIFY_TEXT_COLOR.to_string(),
        }
    }
}

/// Outbound seam toward the platform toast/snackbar facility.
pub trait NotificationSink {
    /// Hands one notification to the surface. Must not block or fail.
    fn show(&self, notification: Notification);
}

/// Queue-backed sink drained by the UI layer.
///
/// The core cannot render toasts itself; the FFI exposes a drain call the
/// UI polls after each interaction.
#[derive(Debug, Default)]
pub struct QueuedNotificationSink {
    queue: RefCell<VecDeque<Notification>>,
}

impl QueuedNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all pending notifications, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.queue.borrow_mut().drain(..).collect()
    }

    /// Number of pending notifications.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl NotificationSink for QueuedNotificationSink {
    fn show(&self, notification: Notification) {
        self.queue.borrow_mut().push_back(notification);
    }
}
