//! Slot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the read/write API over the durable `slots` table.
//! - Keep SQL inside the storage boundary.
//!
//! # Invariants
//! - `read_slot` distinguishes absence (`Ok(None)`) from failure.
//! - `write_slot` is an unconditional overwrite; the newest value wins.

use crate::db::DbResult;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

/// Durable key-value slot access.
///
/// The to-do screen uses a single slot; the contract stays generic so
/// tests can exercise storage failures through alternative impls.
pub trait SlotRepository {
    /// Returns the stored string for `key`, or `None` when absent.
    fn read_slot(&self, key: &str) -> DbResult<Option<String>>;

    /// Stores `value` under `key`, overwriting any prior value.
    fn write_slot(&self, key: &str, value: &str) -> DbResult<()>;
}

/// SQLite-backed slot repository.
///
/// Owns its connection: the screen service holding the repository lives
/// for the whole process, so there is no outer scope to borrow from.
pub struct SqliteSlotRepository {
    conn: Connection,
}

impl SqliteSlotRepository {
    /// Wraps an already-bootstrapped connection (see `db::open_db`).
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl SlotRepository for SqliteSlotRepository {
    fn read_slot(&self, key: &str) -> DbResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        debug!(
            "event=slot_read module=storage status=ok key={key} present={}",
            value.is_some()
        );
        Ok(value)
    }

    fn write_slot(&self, key: &str, value: &str) -> DbResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;

        debug!(
            "event=slot_write module=storage status=ok key={key} bytes={}",
            value.len()
        );
        Ok(())
    }
}
