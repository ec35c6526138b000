//! Todo record and id allocation.
//!
//! # Responsibility
//! - Define the single persisted entity of the application.
//! - Allocate ids that stay unique even for same-millisecond bursts.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reassigned.
//! - `completed` starts `false`; toggling is its own inverse.
//! - Allocated ids are strictly increasing within one allocator.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Numeric identity of a todo record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// The persisted slot format pins ids as JSON numbers, so this stays an
/// integer rather than an opaque token.
pub type TodoId = i64;

/// The unit entity of the to-do screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Identity key for toggle/delete lookup. Unique within one store.
    pub id: TodoId,
    /// User-entered text. The model enforces no constraint; blank
    /// rejection happens before construction at the use-case layer.
    pub text: String,
    /// Completion flag, flipped in place by the toggle operation.
    pub completed: bool,
}

impl Todo {
    /// Creates a new incomplete record.
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Flips the completion flag in place.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Monotonic id allocator seeded from the wall clock.
///
/// The legacy scheme used the raw creation timestamp in milliseconds,
/// which collides when two records are created within one millisecond.
/// This allocator keeps the timestamp flavor but returns
/// `max(now_ms, last + 1)`, so every allocation is strictly greater than
/// the previous one.
#[derive(Debug)]
pub struct TodoIdAllocator {
    last: AtomicI64,
}

impl TodoIdAllocator {
    /// Creates an allocator with no prior allocation.
    pub fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    /// Creates an allocator that will never return an id at or below
    /// `floor`. Used after a restore so new ids stay above loaded ones.
    pub fn starting_after(floor: TodoId) -> Self {
        Self {
            last: AtomicI64::new(floor),
        }
    }

    /// Returns the next unique id.
    pub fn next_id(&self) -> TodoId {
        let now = epoch_millis();
        self.last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            // Closure always returns Some, so fetch_update cannot fail.
            .map_or(now, |last| now.max(last + 1))
    }
}

impl Default for TodoIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

fn epoch_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        // Pre-epoch clocks degrade to counter-only allocation.
        .unwrap_or(0)
}
