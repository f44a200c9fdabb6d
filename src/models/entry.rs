use super::{entry_type::EntryType, period::HalfDayPeriod};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single day's work/leave record.
///
/// Entries are owned by the date bucket they belong to and carry a locally
/// generated stable id; the remote store never assigns ids, which is what
/// makes remote upserts idempotent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub id: String,
    pub date: NaiveDate,                       // ⇔ entries.date (TEXT "YYYY-MM-DD")
    #[serde(rename = "type")]
    pub kind: EntryType,                       // ⇔ entries.kind
    pub project: Option<String>,               // ⇔ entries.project_key ("P100-01")
    pub hours: f64,                            // ⇔ entries.hours (REAL)
    #[serde(rename = "halfDayPeriod")]
    pub period: Option<HalfDayPeriod>,         // ⇔ entries.period ('am' | 'pm')
    #[serde(default)]
    pub comments: String,                      // ⇔ entries.comments
    pub created_at: String,                    // ⇔ entries.created_at (ISO8601)
}

impl WorkEntry {
    /// High-level constructor for entries created from the CLI.
    /// - Generates a fresh local id
    /// - Forces `hours` when the type fixes them (half-leave = 4, full = 8)
    /// - Sets `created_at = now() in ISO8601`
    pub fn new(
        date: NaiveDate,
        kind: EntryType,
        project: Option<String>,
        hours: f64,
        period: Option<HalfDayPeriod>,
        comments: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            date,
            kind,
            project,
            hours: kind.fixed_hours().unwrap_or(hours),
            period,
            comments,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Weekday name for the entry date ("Monday", ...).
    pub fn day_name(&self) -> String {
        self.date.format("%A").to_string()
    }
}
