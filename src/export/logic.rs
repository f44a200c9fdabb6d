use crate::db::pool::DbPool;
use crate::db::queries::{load_entries, load_projects};
use crate::errors::AppResult;
use crate::export::csv::write_csv;
use crate::export::envelope::BackupEnvelope;
use crate::export::fs_utils::ensure_writable;
use crate::export::range::parse_range;
use crate::export::ExportFormat;
use crate::ui::messages::{success, warning};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export entries (and, for JSON backups, projects).
    ///
    /// - `file`: output file path
    /// - `range`: `None`, `"all"`, or an expression such as:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`, `YYYY-MM:YYYY-MM`, `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let entries = load_entries(&pool.conn, date_bounds)?;
        let projects = load_projects(&pool.conn)?;

        if entries.is_empty() {
            warning("No entries found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => {
                let categories: HashMap<String, String> = projects
                    .iter()
                    .map(|p| (p.key(), p.category.clone()))
                    .collect();
                write_csv(path, &entries, &categories)?;
            }
            ExportFormat::Json => {
                BackupEnvelope::build(entries, projects).write(path)?;
            }
        }

        success(format!("Export completed: {}", path.display()));
        Ok(())
    }
}
