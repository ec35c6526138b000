//! To-do screen use cases and slot synchronization.
//!
//! # Responsibility
//! - Validate and dispatch the screen's mutations onto the state store.
//! - Keep the durable `savedData` slot eventually consistent with the
//!   store: one read at startup, one write after every effective change.
//!
//! # Invariants
//! - Whitespace-only input never reaches the store.
//! - Every slot write serializes the full current collection; the latest
//!   write always reflects the latest state.
//! - Storage failures surface as transient notifications and are
//!   abandoned until the next natural trigger; nothing retries, nothing
//!   rolls back in-memory state, nothing crashes.

use crate::model::todo::{Todo, TodoId, TodoIdAllocator};
use crate::notify::{Notification, NotificationSink};
use crate::storage::slot_repo::SlotRepository;
use crate::store::todo_store::TodoStore;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Durable slot holding the serialized collection.
pub const SAVED_DATA_KEY: &str = "savedData";

/// Validation feedback shown for blank input.
pub const EMPTY_INPUT_MESSAGE: &str = "Add characters to create todo";

/// Per-variant capability switch for the unified screen component.
///
/// One app variant ships a per-item delete affordance, the other does
/// not; both share this component and the same state/persistence
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenConfig {
    pub delete_enabled: bool,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            delete_enabled: true,
        }
    }
}

pub type SyncResult<T> = Result<T, SyncError>;

/// The two failure kinds of the persistence bridge.
#[derive(Debug)]
pub enum SyncError {
    /// Durable slot read or write failed.
    Storage(crate::db::DbError),
    /// Slot payload was present but not a valid todo array.
    Decode(serde_json::Error),
}

impl Display for SyncError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Decode(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SyncError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Decode(err) => Some(err),
        }
    }
}

impl From<crate::db::DbError> for SyncError {
    fn from(value: crate::db::DbError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// The single to-do screen: state store, persistence bridge and
/// notification routing behind one explicitly constructed instance.
pub struct TodoScreenService<R: SlotRepository, N: NotificationSink> {
    store: TodoStore,
    repo: R,
    sink: N,
    allocator: TodoIdAllocator,
    config: ScreenConfig,
}

impl<R: SlotRepository, N: NotificationSink> TodoScreenService<R, N> {
    /// Creates the screen with an empty store.
    ///
    /// Callers are expected to invoke [`restore`](Self::restore) once
    /// before the first user interaction.
    pub fn new(repo: R, sink: N, config: ScreenConfig) -> Self {
        Self {
            store: TodoStore::new(),
            repo,
            sink,
            allocator: TodoIdAllocator::new(),
            config,
        }
    }

    /// Read access for the rendering layer.
    pub fn todos(&self) -> &[Todo] {
        self.store.todos()
    }

    /// Active capability configuration.
    pub fn config(&self) -> ScreenConfig {
        self.config
    }

    /// Notification sink, exposed so the UI layer can drain queued
    /// messages through the same instance it handed in.
    pub fn sink(&self) -> &N {
        &self.sink
    }

    /// Adds a todo from raw user input.
    ///
    /// Whitespace-only input is rejected before any record is
    /// constructed and surfaced through the notification sink; the store
    /// and the slot stay untouched. Trimming applies to validation only;
    /// accepted input is stored verbatim.
    pub fn add_todo(&mut self, text: &str) {
        if text.trim().is_empty() {
            info!("event=todo_add module=service status=rejected reason=empty_input");
            self.sink.show(Notification::short(EMPTY_INPUT_MESSAGE));
            return;
        }

        let todo = Todo::new(self.allocator.next_id(), text);
        info!(
            "event=todo_add module=service status=ok id={} len={}",
            todo.id,
            self.store.len() + 1
        );
        self.store.add(todo);
        self.sync_slot();
    }

    /// Toggles completion of the record matching `id`.
    ///
    /// An unknown id is a benign no-op and triggers no write.
    pub fn toggle_todo(&mut self, id: TodoId) {
        if self.store.toggle(id) {
            info!("event=todo_toggle module=service status=ok id={id}");
            self.sync_slot();
        }
    }

    /// Deletes the record matching `id`, when the variant supports it.
    ///
    /// An unknown id is a benign no-op and triggers no write. When the
    /// capability is disabled the call is ignored entirely.
    pub fn delete_todo(&mut self, id: TodoId) {
        if !self.config.delete_enabled {
            warn!("event=todo_delete module=service status=ignored reason=capability_disabled");
            return;
        }
        if self.store.delete(id) {
            info!("event=todo_delete module=service status=ok id={id}");
            self.sync_slot();
        }
    }

    /// Startup read of the durable slot, run once at screen mount.
    ///
    /// An absent slot leaves the store empty. A present slot is parsed
    /// and loaded, and the loaded state is immediately written back (the
    /// startup load is itself an observed change). Read or parse failure
    /// surfaces a notification and leaves the store unchanged; there is
    /// no retry path for startup reads.
    pub fn restore(&mut self) {
        match self.read_saved_todos() {
            Ok(Some(todos)) => {
                info!(
                    "event=slot_restore module=service status=ok count={}",
                    todos.len()
                );
                if let Some(max_id) = todos.iter().map(|todo| todo.id).max() {
                    self.allocator = TodoIdAllocator::starting_after(max_id);
                }
                self.store.load(todos);
                self.sync_slot();
            }
            Ok(None) => {
                info!("event=slot_restore module=service status=ok count=0 slot=absent");
            }
            Err(err) => {
                warn!("event=slot_restore module=service status=error error={err}");
                self.sink
                    .show(Notification::short(format!("Error loading data, {err}")));
            }
        }
    }

    fn read_saved_todos(&self) -> SyncResult<Option<Vec<Todo>>> {
        let Some(raw) = self.repo.read_slot(SAVED_DATA_KEY)? else {
            return Ok(None);
        };
        let todos: Vec<Todo> = serde_json::from_str(&raw)?;
        Ok(Some(todos))
    }

    /// Serializes the full current collection into the slot.
    fn sync_slot(&mut self) {
        if let Err(err) = self.write_current_state() {
            warn!(
                "event=slot_write module=service status=error revision={} error={err}",
                self.store.revision()
            );
            self.sink
                .show(Notification::short(format!("Error saving data, {err}")));
        }
    }

    fn write_current_state(&self) -> SyncResult<()> {
        let payload = serde_json::to_string(self.store.todos())?;
        self.repo.write_slot(SAVED_DATA_KEY, &payload)?;
        Ok(())
    }
}
