//! FFI use-case API for the UI-facing to-do screen.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the UI runtime.
//! - Keep error semantics simple for UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The screen service is constructed exactly once, at the explicit
//!   `init_screen` initialization point, and reused for every call.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};
use tapdo_core::db::open_db;
use tapdo_core::{
    core_version as core_version_inner, default_log_level, init_logging as init_logging_inner,
    ping as ping_inner, QueuedNotificationSink, ScreenConfig, SqliteSlotRepository,
    TodoScreenService,
};

type Screen = TodoScreenService<SqliteSlotRepository, QueuedNotificationSink>;

const SCREEN_DB_FILE_NAME: &str = "tapdo.sqlite3";
static SCREEN: OnceLock<Mutex<Screen>> = OnceLock::new();
static SCREEN_SETUP: OnceLock<ScreenSetup> = OnceLock::new();

/// Configuration recorded by the winning `init_screen` call, used to
/// reject conflicting re-initialization attempts.
struct ScreenSetup {
    db_path: PathBuf,
    delete_enabled: bool,
}

/// Minimal health-check API for bridge smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive);
///   empty selects the build-mode default.
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let level = if level.trim().is_empty() {
        default_log_level()
    } else {
        level.as_str()
    };
    match init_logging_inner(level, log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for screen mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoActionResponse {
    /// Whether the operation was accepted.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TodoActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// One rendered list row for the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiTodoItem {
    /// Stable numeric record id.
    pub id: i64,
    /// User-entered text.
    pub text: String,
    /// Completion flag driving the row style.
    pub completed: bool,
}

/// List response envelope for screen rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListResponse {
    /// Ordered items, insertion order preserved.
    pub items: Vec<FfiTodoItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// One transient notification queued for the UI toast surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiNotification {
    /// Message text to display.
    pub text: String,
    /// Snackbar background color (hex).
    pub background_color: String,
    /// Snackbar text color (hex).
    pub text_color: String,
}

/// Initializes the process-wide to-do screen and restores saved state.
///
/// Input semantics:
/// - `db_path`: absolute file path for the durable store; empty uses a
///   temp-dir default.
/// - `delete_enabled`: capability switch for the per-item delete
///   affordance.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Safe to call repeatedly with the same `db_path + delete_enabled`
///   (idempotent).
/// - Re-initialization with a different path or capability is rejected.
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_screen(db_path: String, delete_enabled: bool) -> String {
    let path = resolve_db_path(db_path.as_str());

    if let Some(setup) = SCREEN_SETUP.get() {
        if setup.db_path != path {
            return format!(
                "screen already initialized at `{}`; refusing to switch to `{}`",
                setup.db_path.display(),
                path.display()
            );
        }
        if setup.delete_enabled != delete_enabled {
            return format!(
                "screen already initialized with delete_enabled={}; refusing to switch to {delete_enabled}",
                setup.delete_enabled
            );
        }
        return String::new();
    }

    let conn = match open_db(&path) {
        Ok(conn) => conn,
        Err(err) => return format!("screen DB open failed: {err}"),
    };

    let mut screen = TodoScreenService::new(
        SqliteSlotRepository::new(conn),
        QueuedNotificationSink::new(),
        ScreenConfig { delete_enabled },
    );
    screen.restore();
    log::info!(
        "event=screen_init module=ffi status=ok delete_enabled={delete_enabled} restored={}",
        screen.todos().len()
    );

    // Calls originate from the single UI thread; a concurrent first call
    // would leave the winning instance in place.
    let _ = SCREEN_SETUP.set(ScreenSetup {
        db_path: path,
        delete_enabled,
    });
    let _ = SCREEN.set(Mutex::new(screen));
    String::new()
}

/// Adds a todo from raw input text.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Blank input is rejected inside core and surfaced via the
///   notification queue; the call itself still succeeds.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_add(text: String) -> TodoActionResponse {
    with_screen(|screen| {
        screen.add_todo(text.as_str());
        TodoActionResponse::success("Dispatched.")
    })
}

/// Toggles completion of one todo by id.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Unknown ids are benign no-ops.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_toggle(id: i64) -> TodoActionResponse {
    with_screen(|screen| {
        screen.toggle_todo(id);
        TodoActionResponse::success("Dispatched.")
    })
}

/// Deletes one todo by id, when the variant supports deletion.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Unknown ids and delete-disabled variants are benign no-ops.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_delete(id: i64) -> TodoActionResponse {
    with_screen(|screen| {
        screen.delete_todo(id);
        TodoActionResponse::success("Dispatched.")
    })
}

/// Returns the full ordered todo list for rendering.
///
/// # FFI contract
/// - Sync call, memory-backed execution.
/// - Never panics; an uninitialized screen yields an empty list plus a
///   diagnostic message.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_list() -> TodoListResponse {
    let Some(lock) = SCREEN.get() else {
        return TodoListResponse {
            items: Vec::new(),
            message: "screen not initialized".to_string(),
        };
    };
    let Ok(screen) = lock.lock() else {
        return TodoListResponse {
            items: Vec::new(),
            message: "screen lock poisoned".to_string(),
        };
    };

    let items = screen
        .todos()
        .iter()
        .map(|todo| FfiTodoItem {
            id: todo.id,
            text: todo.text.clone(),
            completed: todo.completed,
        })
        .collect::<Vec<_>>();
    let message = format!("{} item(s).", items.len());
    TodoListResponse { items, message }
}

/// Drains queued transient notifications for the UI toast surface.
///
/// # FFI contract
/// - Sync call, memory-backed execution.
/// - Returned notifications are removed from the queue; display is
///   fire-and-forget.
/// - Never panics; an uninitialized screen yields an empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn drain_notifications() -> Vec<FfiNotification> {
    let Some(screen) = lock_screen() else {
        return Vec::new();
    };

    screen
        .sink()
        .drain()
        .into_iter()
        .map(|notification| FfiNotification {
            text: notification.text,
            background_color: notification.background_color,
            text_color: notification.text_color,
        })
        .collect()
}

fn resolve_db_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        std::env::temp_dir().join(SCREEN_DB_FILE_NAME)
    } else {
        PathBuf::from(trimmed)
    }
}

fn lock_screen() -> Option<MutexGuard<'static, Screen>> {
    SCREEN.get().and_then(|lock| lock.lock().ok())
}

fn with_screen(f: impl FnOnce(&mut Screen) -> TodoActionResponse) -> TodoActionResponse {
    match lock_screen() {
        Some(mut screen) => f(&mut screen),
        None => TodoActionResponse::failure("screen not initialized; call init_screen first"),
    }
}
