//! Unified application error type.
//! All modules (db, core, remote, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid entry type: {0}")]
    InvalidEntryType(String),

    #[error("Invalid half-day period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid hours value: {0}")]
    InvalidHours(String),

    #[error("Invalid project key: {0}")]
    InvalidProjectKey(String),

    // ---------------------------
    // Business-rule violations
    // ---------------------------
    #[error("Daily budget exceeded on {date}: {total} hours would exceed the {budget}-hour limit")]
    DailyBudgetExceeded { date: String, total: f64, budget: f64 },

    #[error("A full-day entry already covers {0}; no other entries are allowed")]
    FullDayConflict(String),

    #[error("The {period} half-day period on {date} is already taken")]
    PeriodTaken { date: String, period: String },

    #[error("Entry type '{0}' requires a project")]
    ProjectRequired(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Project {0} is archived and cannot be booked")]
    ProjectInactive(String),

    #[error("Project {key} is referenced by {count} entries and cannot be deleted")]
    ProjectInUse { key: String, count: i64 },

    #[error("Project {0} already exists")]
    DuplicateProject(String),

    #[error("No entry found: {0}")]
    EntryNotFound(String),

    // ---------------------------
    // Remote / sync errors
    // ---------------------------
    #[error("Remote store error: {0}")]
    Remote(String),

    #[error("Sync error: {0}")]
    Sync(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / import errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Unsupported backup version: {0}")]
    BackupVersion(u32),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
