//! Data service orchestrating the local store and the remote document store.
//!
//! Local writes always happen synchronously at mutation time; this module
//! mirrors that state to the remote (`push`) or replaces it from the remote
//! (`pull`). Remote failures are non-fatal: the dirty flag stays set and the
//! next explicit sync retries the whole mirror, which is safe because every
//! remote write is an idempotent upsert keyed by the client-generated id.

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{
    clear_entries, clear_projects, count_entries, count_projects, load_entries, load_projects,
    rebuild_project_usage, upsert_entry, upsert_project,
};
use crate::db::{log, meta};
use crate::errors::{AppError, AppResult};
use crate::models::entry::WorkEntry;
use crate::models::project::Project;
use crate::models::sync_status::SyncStatus;
use crate::remote::json_dir::JsonDirStore;
use crate::remote::{RemoteStore, PROJECTS, WORKLOGS};
use crate::ui::messages::{success, warning};
use chrono::Local;
use std::collections::HashSet;

pub struct SyncLogic;

/// Outcome of a push/pull, reported by the CLI.
#[derive(Debug)]
pub struct SyncReport {
    pub status: SyncStatus,
    pub entries: usize,
    pub projects: usize,
}

impl SyncLogic {
    /// Build the remote adapter from the config; `None` in guest mode.
    pub fn remote_for(cfg: &Config) -> Option<JsonDirStore> {
        match (&cfg.user, &cfg.remote_root) {
            (Some(user), Some(root)) => Some(JsonDirStore::new(root.clone(), user.clone())),
            _ => None,
        }
    }

    /// Current sync state: status, dirty flag, last successful sync.
    pub fn status(pool: &DbPool, cfg: &Config) -> AppResult<(SyncStatus, bool, Option<String>)> {
        let pending = meta::pending_changes(&pool.conn)?;
        let last = meta::last_sync(&pool.conn)?;

        let status = if !cfg.has_account() {
            SyncStatus::Local
        } else if pending {
            SyncStatus::Idle
        } else if last.is_some() {
            SyncStatus::Synced
        } else {
            SyncStatus::Idle
        };

        Ok((status, pending, last))
    }

    /// Mirror the full local state to the remote store.
    pub fn push(pool: &mut DbPool, cfg: &Config) -> AppResult<SyncReport> {
        let Some(store) = Self::remote_for(cfg) else {
            return Self::guest_report(pool);
        };
        Self::push_with(pool, &store)
    }

    pub fn push_with(pool: &mut DbPool, store: &dyn RemoteStore) -> AppResult<SyncReport> {
        let conn = &pool.conn;
        let entries = load_entries(conn, None)?;
        let projects = load_projects(conn)?;

        match Self::mirror_to_remote(store, &entries, &projects) {
            Ok(()) => {
                meta::set_pending_changes(conn, false)?;
                meta::set_last_sync(conn, &Local::now().to_rfc3339())?;
                log::wlog(
                    conn,
                    "sync_push",
                    "",
                    &format!("{} entries, {} projects", entries.len(), projects.len()),
                )?;
                success(format!(
                    "Pushed {} entries and {} projects.",
                    entries.len(),
                    projects.len()
                ));
                Ok(SyncReport {
                    status: SyncStatus::Synced,
                    entries: entries.len(),
                    projects: projects.len(),
                })
            }
            Err(e) => {
                // Keep the dirty flag: the next explicit sync retries.
                meta::set_pending_changes(conn, true)?;
                log::wlog(conn, "sync_error", "", &e.to_string())?;
                warning(format!("Remote push failed: {e} — changes kept pending."));
                Ok(SyncReport {
                    status: SyncStatus::Error,
                    entries: entries.len(),
                    projects: projects.len(),
                })
            }
        }
    }

    /// Replace the local mirror with the remote collections.
    /// On remote failure, falls back to the local store with a warning.
    pub fn pull(pool: &mut DbPool, cfg: &Config) -> AppResult<SyncReport> {
        let Some(store) = Self::remote_for(cfg) else {
            return Self::guest_report(pool);
        };
        Self::pull_with(pool, &store)
    }

    pub fn pull_with(pool: &mut DbPool, store: &dyn RemoteStore) -> AppResult<SyncReport> {
        let fetched = Self::fetch_remote(store);

        let (entries, projects) = match fetched {
            Ok(data) => data,
            Err(e) => {
                log::wlog(&pool.conn, "sync_error", "", &e.to_string())?;
                warning(format!("Remote unreachable: {e} — using local data."));
                return Ok(SyncReport {
                    status: SyncStatus::Error,
                    entries: count_entries(&pool.conn)? as usize,
                    projects: count_projects(&pool.conn)? as usize,
                });
            }
        };

        let tx = pool.conn.transaction()?;
        clear_entries(&tx)?;
        clear_projects(&tx)?;
        for p in &projects {
            upsert_project(&tx, p)?;
        }
        for e in &entries {
            upsert_entry(&tx, e)?;
        }
        // Counters from the remote may be stale; the entries table is truth.
        rebuild_project_usage(&tx)?;
        tx.commit()?;

        let conn = &pool.conn;
        meta::set_pending_changes(conn, false)?;
        meta::set_last_sync(conn, &Local::now().to_rfc3339())?;
        log::wlog(
            conn,
            "sync_pull",
            "",
            &format!("{} entries, {} projects", entries.len(), projects.len()),
        )?;
        success(format!(
            "Pulled {} entries and {} projects.",
            entries.len(),
            projects.len()
        ));

        Ok(SyncReport {
            status: SyncStatus::Synced,
            entries: entries.len(),
            projects: projects.len(),
        })
    }

    fn guest_report(pool: &mut DbPool) -> AppResult<SyncReport> {
        warning("Guest mode: no account configured, data stays local.");
        Ok(SyncReport {
            status: SyncStatus::Local,
            entries: count_entries(&pool.conn)? as usize,
            projects: count_projects(&pool.conn)? as usize,
        })
    }

    fn mirror_to_remote(
        store: &dyn RemoteStore,
        entries: &[WorkEntry],
        projects: &[Project],
    ) -> AppResult<()> {
        for e in entries {
            let doc = serde_json::to_value(e)
                .map_err(|err| AppError::Sync(format!("serialize entry {}: {err}", e.id)))?;
            store.put(WORKLOGS, &e.id, &doc)?;
        }
        for p in projects {
            let doc = serde_json::to_value(p)
                .map_err(|err| AppError::Sync(format!("serialize project {}: {err}", p.id)))?;
            store.put(PROJECTS, &p.id, &doc)?;
        }

        // Prune remote documents deleted locally, so the remote is a true
        // mirror rather than an append-only pile.
        let local_entry_ids: HashSet<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        for id in store.list_ids(WORKLOGS)? {
            if !local_entry_ids.contains(id.as_str()) {
                store.delete(WORKLOGS, &id)?;
            }
        }
        let local_project_ids: HashSet<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        for id in store.list_ids(PROJECTS)? {
            if !local_project_ids.contains(id.as_str()) {
                store.delete(PROJECTS, &id)?;
            }
        }

        Ok(())
    }

    fn fetch_remote(store: &dyn RemoteStore) -> AppResult<(Vec<WorkEntry>, Vec<Project>)> {
        let mut entries = Vec::new();
        for doc in store.get_all(WORKLOGS)? {
            let e: WorkEntry = serde_json::from_value(doc)
                .map_err(|err| AppError::Sync(format!("malformed remote entry: {err}")))?;
            entries.push(e);
        }

        let mut projects = Vec::new();
        for doc in store.get_all(PROJECTS)? {
            let p: Project = serde_json::from_value(doc)
                .map_err(|err| AppError::Sync(format!("malformed remote project: {err}")))?;
            projects.push(p);
        }

        Ok((entries, projects))
    }
}
