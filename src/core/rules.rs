//! Entry validation / business-rule engine.
//!
//! Per-entry checks gate malformed records; per-day checks are a linear scan
//! over the date bucket and keep the daily invariants true:
//! - sum of hours ≤ the daily budget
//! - at most one full-day entry, excluding everything else that day
//! - at most one half-day entry per period

use crate::errors::{AppError, AppResult};
use crate::models::entry::WorkEntry;
use crate::models::entry_type::EntryType;

pub struct DayRules {
    pub daily_budget: f64,
}

impl Default for DayRules {
    fn default() -> Self {
        Self { daily_budget: 8.0 }
    }
}

impl DayRules {
    pub fn new(daily_budget: f64) -> Self {
        Self { daily_budget }
    }

    /// Type-specific field checks on a single entry.
    pub fn check_entry(&self, entry: &WorkEntry) -> AppResult<()> {
        match entry.kind {
            EntryType::Work => {
                if entry.project.is_none() {
                    return Err(AppError::ProjectRequired(
                        entry.kind.to_db_str().to_string(),
                    ));
                }
                if entry.hours <= 0.0 || entry.hours > self.daily_budget {
                    return Err(AppError::InvalidHours(format!(
                        "{} (expected 0 < hours <= {})",
                        entry.hours, self.daily_budget
                    )));
                }
            }
            EntryType::HalfLeave => {
                if entry.period.is_none() {
                    return Err(AppError::InvalidPeriod(
                        "half-leave requires --period am|pm".to_string(),
                    ));
                }
            }
            EntryType::FullLeave | EntryType::Holiday => {}
        }
        Ok(())
    }

    /// Day-level checks for a candidate against the date's existing entries.
    pub fn check_day(&self, existing: &[WorkEntry], candidate: &WorkEntry) -> AppResult<()> {
        let date = candidate.date_str();

        // A full-day entry already on the date excludes everything.
        if existing.iter().any(|e| e.kind.is_full_day()) {
            return Err(AppError::FullDayConflict(date));
        }

        // A full-day candidate needs an empty date.
        if candidate.kind.is_full_day() && !existing.is_empty() {
            return Err(AppError::FullDayConflict(date));
        }

        // One half-day entry per period.
        if candidate.kind == EntryType::HalfLeave {
            if let Some(period) = candidate.period {
                let taken = existing
                    .iter()
                    .any(|e| e.kind == EntryType::HalfLeave && e.period == Some(period));
                if taken {
                    return Err(AppError::PeriodTaken {
                        date,
                        period: period.label().to_string(),
                    });
                }
            }
        }

        // Daily hour budget.
        let total: f64 = existing.iter().map(|e| e.hours).sum::<f64>() + candidate.hours;
        if total > self.daily_budget + f64::EPSILON {
            return Err(AppError::DailyBudgetExceeded {
                date,
                total,
                budget: self.daily_budget,
            });
        }

        Ok(())
    }

    /// Both levels in one call; used by add and import.
    pub fn check(&self, existing: &[WorkEntry], candidate: &WorkEntry) -> AppResult<()> {
        self.check_entry(candidate)?;
        self.check_day(existing, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::period::HalfDayPeriod;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    fn work(hours: f64) -> WorkEntry {
        WorkEntry::new(
            date(),
            EntryType::Work,
            Some("P100-01".into()),
            hours,
            None,
            String::new(),
        )
    }

    fn half(period: HalfDayPeriod) -> WorkEntry {
        WorkEntry::new(
            date(),
            EntryType::HalfLeave,
            None,
            0.0,
            Some(period),
            String::new(),
        )
    }

    fn full_day(kind: EntryType) -> WorkEntry {
        WorkEntry::new(date(), kind, None, 0.0, None, String::new())
    }

    #[test]
    fn work_requires_project() {
        let rules = DayRules::default();
        let mut e = work(4.0);
        e.project = None;
        assert!(matches!(
            rules.check_entry(&e),
            Err(AppError::ProjectRequired(_))
        ));
    }

    #[test]
    fn work_hours_must_be_in_budget() {
        let rules = DayRules::default();
        assert!(rules.check_entry(&work(8.0)).is_ok());
        assert!(rules.check_entry(&work(0.0)).is_err());
        assert!(rules.check_entry(&work(9.0)).is_err());
    }

    #[test]
    fn half_leave_hours_are_fixed() {
        let e = half(HalfDayPeriod::Am);
        assert_eq!(e.hours, 4.0);
    }

    #[test]
    fn daily_budget_is_enforced() {
        let rules = DayRules::default();
        let existing = vec![work(5.0)];
        assert!(rules.check_day(&existing, &work(3.0)).is_ok());
        assert!(matches!(
            rules.check_day(&existing, &work(3.5)),
            Err(AppError::DailyBudgetExceeded { .. })
        ));
    }

    #[test]
    fn budget_error_reports_configured_budget() {
        let rules = DayRules::new(6.0);
        let err = rules.check_day(&[work(4.0)], &work(3.0)).unwrap_err();
        assert!(err.to_string().contains("the 6-hour limit"));
    }

    #[test]
    fn full_day_excludes_other_entries() {
        let rules = DayRules::default();

        // full-day candidate on a non-empty date
        let existing = vec![work(2.0)];
        assert!(matches!(
            rules.check_day(&existing, &full_day(EntryType::Holiday)),
            Err(AppError::FullDayConflict(_))
        ));

        // anything on a date already covered by a full-day entry
        let existing = vec![full_day(EntryType::FullLeave)];
        assert!(matches!(
            rules.check_day(&existing, &work(1.0)),
            Err(AppError::FullDayConflict(_))
        ));
    }

    #[test]
    fn one_half_day_per_period() {
        let rules = DayRules::default();
        let existing = vec![half(HalfDayPeriod::Am)];
        assert!(matches!(
            rules.check_day(&existing, &half(HalfDayPeriod::Am)),
            Err(AppError::PeriodTaken { .. })
        ));
        assert!(rules.check_day(&existing, &half(HalfDayPeriod::Pm)).is_ok());
    }

    #[test]
    fn am_plus_pm_half_leave_fills_the_day() {
        let rules = DayRules::default();
        let existing = vec![half(HalfDayPeriod::Am), half(HalfDayPeriod::Pm)];
        // 4 + 4 = 8 → no room for work
        assert!(matches!(
            rules.check_day(&existing, &work(1.0)),
            Err(AppError::DailyBudgetExceeded { .. })
        ));
    }
}
