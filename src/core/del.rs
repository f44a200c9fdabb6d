use crate::db::pool::DbPool;
use crate::db::queries::{adjust_project_usage, delete_entry, find_entry, load_entries_by_date};
use crate::db::{log, meta};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use chrono::NaiveDate;

/// High-level business logic for the `del` command.
pub struct DelLogic;

impl DelLogic {
    /// Delete by 1-based position within the date bucket.
    pub fn by_index(pool: &mut DbPool, date: NaiveDate, index: usize) -> AppResult<()> {
        let conn = &pool.conn;

        let entries = load_entries_by_date(conn, &date)?;
        if entries.is_empty() {
            return Err(AppError::EntryNotFound(format!(
                "no entries on {}",
                date.format("%Y-%m-%d")
            )));
        }
        if index == 0 || index > entries.len() {
            return Err(AppError::EntryNotFound(format!(
                "entry {} on {} (the date has {} entries)",
                index,
                date.format("%Y-%m-%d"),
                entries.len()
            )));
        }

        let entry = &entries[index - 1];
        Self::remove(pool, &entry.id.clone())
    }

    /// Delete by entry id.
    pub fn by_id(pool: &mut DbPool, id: &str) -> AppResult<()> {
        Self::remove(pool, id)
    }

    fn remove(pool: &mut DbPool, id: &str) -> AppResult<()> {
        let conn = &pool.conn;

        let entry =
            find_entry(conn, id)?.ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;

        delete_entry(conn, &entry.id)?;
        if let Some(key) = &entry.project {
            adjust_project_usage(conn, key, -1)?;
        }
        meta::set_pending_changes(conn, true)?;
        log::wlog(
            conn,
            "del_entry",
            &entry.id,
            &format!("{} on {}", entry.kind.label(), entry.date_str()),
        )?;

        success(format!(
            "Deleted {} entry on {}.",
            entry.kind.label(),
            entry.date_str()
        ));
        Ok(())
    }
}
