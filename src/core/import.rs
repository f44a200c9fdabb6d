use crate::config::Config;
use crate::core::rules::DayRules;
use crate::db::pool::DbPool;
use crate::db::queries::{
    clear_entries, clear_projects, rebuild_project_usage, upsert_entry, upsert_project,
};
use crate::db::{log, meta};
use crate::errors::{AppError, AppResult};
use crate::export::envelope::BackupEnvelope;
use crate::models::entry::WorkEntry;
use crate::ui::messages::success;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Restore local data from a JSON backup envelope.
///
/// The whole file is validated against the business rules before anything is
/// written, so a bad backup never leaves the store half-replaced.
pub struct ImportLogic;

impl ImportLogic {
    pub fn apply(pool: &mut DbPool, cfg: &Config, file: &str) -> AppResult<()> {
        let envelope = BackupEnvelope::read(Path::new(file))?;
        let rules = DayRules::new(cfg.daily_budget);

        // Re-validate every day bucket: backups may predate rule changes or
        // come from a tampered file.
        let mut buckets: BTreeMap<String, Vec<&WorkEntry>> = BTreeMap::new();
        for entry in envelope.entries() {
            buckets.entry(entry.date_str()).or_default().push(entry);
        }
        for (date, entries) in &buckets {
            let mut accepted: Vec<WorkEntry> = Vec::new();
            for entry in entries {
                rules
                    .check(&accepted, entry)
                    .map_err(|e| AppError::Import(format!("{date}: {e}")))?;
                accepted.push((*entry).clone());
            }
        }

        // Every referenced project key must resolve within the envelope,
        // otherwise the restore would leave dangling keys that no registry
        // invariant (usage count, delete guard) covers. Archived projects are
        // allowed here: their historical entries still round-trip, only new
        // bookings are blocked.
        let known_keys: HashSet<String> =
            envelope.project_data.iter().map(|p| p.key()).collect();
        for entry in envelope.entries() {
            if let Some(key) = &entry.project {
                if !known_keys.contains(key) {
                    return Err(AppError::Import(format!(
                        "{}: entry references unknown project {key}",
                        entry.date_str()
                    )));
                }
            }
        }

        let entry_count = envelope.entries().count();
        let project_count = envelope.project_data.len();

        let tx = pool.conn.transaction()?;
        clear_entries(&tx)?;
        clear_projects(&tx)?;
        for project in &envelope.project_data {
            upsert_project(&tx, project)?;
        }
        for entry in envelope.entries() {
            upsert_entry(&tx, entry)?;
        }
        rebuild_project_usage(&tx)?;
        tx.commit()?;

        meta::set_pending_changes(&pool.conn, true)?;
        log::wlog(
            &pool.conn,
            "import",
            file,
            &format!("{entry_count} entries, {project_count} projects"),
        )?;

        success(format!(
            "Imported {entry_count} entries and {project_count} projects from {file}."
        ));
        Ok(())
    }
}
