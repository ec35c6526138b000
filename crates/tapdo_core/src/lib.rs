//! Core domain logic for the tapdo to-do screen.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod notify;
pub mod service;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use model::todo::{Todo, TodoId, TodoIdAllocator};
pub use notify::{Notification, NotificationSink, NotifyDuration, QueuedNotificationSink};
pub use service::todo_screen::{
    ScreenConfig, SyncError, SyncResult, TodoScreenService, EMPTY_INPUT_MESSAGE, SAVED_DATA_KEY,
};
pub use storage::slot_repo::{SlotRepository, SqliteSlotRepository};
pub use store::todo_store::TodoStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
