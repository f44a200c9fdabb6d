//! Key-value `meta` table: the dirty flag and sync bookkeeping.
//! `pending_changes` is a true dirty flag set on every local mutation and
//! cleared only after a successful push.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension};

pub const PENDING_CHANGES: &str = "pending_changes";
pub const LAST_SYNC: &str = "last_sync";

pub fn get(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM meta WHERE key = ?1")?;
    let v = stmt.query_row([key], |row| row.get(0)).optional()?;
    Ok(v)
}

pub fn set(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO meta (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        [key, value],
    )?;
    Ok(())
}

pub fn pending_changes(conn: &Connection) -> AppResult<bool> {
    Ok(get(conn, PENDING_CHANGES)?.as_deref() == Some("1"))
}

pub fn set_pending_changes(conn: &Connection, pending: bool) -> AppResult<()> {
    set(conn, PENDING_CHANGES, if pending { "1" } else { "0" })
}

pub fn last_sync(conn: &Connection) -> AppResult<Option<String>> {
    get(conn, LAST_SYNC)
}

pub fn set_last_sync(conn: &Connection, when: &str) -> AppResult<()> {
    set(conn, LAST_SYNC, when)
}
