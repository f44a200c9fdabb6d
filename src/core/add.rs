use crate::config::Config;
use crate::core::rules::DayRules;
use crate::db::pool::DbPool;
use crate::db::queries::{
    adjust_project_usage, find_project_by_key, insert_entry, load_entries_by_date,
};
use crate::db::{log, meta};
use crate::errors::{AppError, AppResult};
use crate::models::entry::WorkEntry;
use crate::models::entry_type::EntryType;
use crate::models::period::HalfDayPeriod;
use crate::models::project::Project;
use crate::ui::messages::success;
use chrono::NaiveDate;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        date: NaiveDate,
        kind: EntryType,
        project: Option<String>,
        hours: Option<f64>,
        period: Option<HalfDayPeriod>,
        comments: String,
    ) -> AppResult<()> {
        let conn = &pool.conn;
        let rules = DayRules::new(cfg.daily_budget);

        // ------------------------------------------------
        // Normalize type-dependent fields
        // ------------------------------------------------
        let (project, hours, period) = match kind {
            EntryType::Work => {
                let h = hours.ok_or_else(|| {
                    AppError::InvalidHours("work entries require --hours".to_string())
                })?;
                (project, h, None)
            }
            // Leave/holiday entries carry no project; period only for half-leave.
            EntryType::HalfLeave => (None, 0.0, period),
            EntryType::FullLeave | EntryType::Holiday => (None, 0.0, None),
        };

        // Work entries must reference an existing, bookable project.
        if let Some(key) = &project {
            let (pid, sub) = Project::split_key(key)
                .ok_or_else(|| AppError::InvalidProjectKey(key.clone()))?;
            let p = find_project_by_key(conn, pid, sub)?
                .ok_or_else(|| AppError::ProjectNotFound(key.clone()))?;
            if !p.is_active {
                return Err(AppError::ProjectInactive(key.clone()));
            }
        }

        let entry = WorkEntry::new(date, kind, project, hours, period, comments);

        // ------------------------------------------------
        // Validate against the day's existing entries
        // ------------------------------------------------
        let existing = load_entries_by_date(conn, &date)?;
        rules.check(&existing, &entry)?;

        // ------------------------------------------------
        // Persist (local-first, then mark dirty for sync)
        // ------------------------------------------------
        insert_entry(conn, &entry)?;
        if let Some(key) = &entry.project {
            adjust_project_usage(conn, key, 1)?;
        }
        meta::set_pending_changes(conn, true)?;
        log::wlog(conn, "add_entry", &entry.id, &format!("{} on {}", entry.kind.label(), entry.date_str()))?;

        match entry.kind {
            EntryType::Work => success(format!(
                "Added {}h of work on {} ({}).",
                entry.hours,
                entry.date_str(),
                entry.project.as_deref().unwrap_or("-"),
            )),
            EntryType::HalfLeave => success(format!(
                "Added half-day leave ({}) on {}.",
                entry.period.map(|p| p.label()).unwrap_or("-"),
                entry.date_str(),
            )),
            _ => success(format!(
                "Added {} on {}.",
                entry.kind.label(),
                entry.date_str(),
            )),
        }

        Ok(())
    }
}
