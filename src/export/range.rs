use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse --range (year / month / day / interval).
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::Export(
                "start and end must have same format".to_string(),
            ));
        }

        let d1 = period_start(start)?;
        let d2 = period_end(end)?;
        if d2 < d1 {
            return Err(AppError::Export(format!(
                "range end {end} precedes start {start}"
            )));
        }
        Ok((d1, d2))
    } else {
        Ok((period_start(r)?, period_end(r)?))
    }
}

/// First day covered by a YYYY / YYYY-MM / YYYY-MM-DD period expression.
fn period_start(p: &str) -> AppResult<NaiveDate> {
    match p.len() {
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::Export(format!("invalid year: {p}")))?;
            NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| AppError::InvalidDate(p.to_string()))
        }
        7 => {
            let (y, m) = split_year_month(p)?;
            NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| AppError::InvalidDate(p.to_string()))
        }
        10 => NaiveDate::parse_from_str(p, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(p.to_string())),
        _ => Err(AppError::Export(format!("unsupported range format: {p}"))),
    }
}

/// Last day covered by a YYYY / YYYY-MM / YYYY-MM-DD period expression.
fn period_end(p: &str) -> AppResult<NaiveDate> {
    match p.len() {
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::Export(format!("invalid year: {p}")))?;
            NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| AppError::InvalidDate(p.to_string()))
        }
        7 => {
            let (y, m) = split_year_month(p)?;
            let last = month_last_day(y, m)
                .ok_or_else(|| AppError::Export(format!("invalid month: {p}")))?;
            NaiveDate::from_ymd_opt(y, m, last).ok_or_else(|| AppError::InvalidDate(p.to_string()))
        }
        10 => NaiveDate::parse_from_str(p, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(p.to_string())),
        _ => Err(AppError::Export(format!("unsupported range format: {p}"))),
    }
}

fn split_year_month(p: &str) -> AppResult<(i32, u32)> {
    // Split instead of byte-slicing: the length check above counts bytes,
    // so a multibyte argument could land off a char boundary.
    let (ys, ms) = p
        .split_once('-')
        .ok_or_else(|| AppError::Export(format!("unsupported range format: {p}")))?;
    let y: i32 = ys
        .parse()
        .map_err(|_| AppError::Export(format!("invalid year: {p}")))?;
    let m: u32 = ms
        .parse()
        .map_err(|_| AppError::Export(format!("invalid month: {p}")))?;
    Ok((y, m))
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_periods() {
        let (s, e) = parse_range("2025").unwrap();
        assert_eq!(s, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(e, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());

        let (s, e) = parse_range("2024-02").unwrap();
        assert_eq!(s, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(e, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let (s, e) = parse_range("2025-09-15").unwrap();
        assert_eq!(s, e);
    }

    #[test]
    fn intervals() {
        let (s, e) = parse_range("2024-11:2025-02").unwrap();
        assert_eq!(s, NaiveDate::from_ymd_opt(2024, 11, 1).unwrap());
        assert_eq!(e, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }

    #[test]
    fn mismatched_precision_is_rejected() {
        assert!(parse_range("2024:2025-02").is_err());
        assert!(parse_range("2025-02:2024").is_err());
    }

    #[test]
    fn inverted_interval_is_rejected() {
        assert!(parse_range("2025-05:2025-01").is_err());
    }

    #[test]
    fn multibyte_garbage_is_rejected_not_panicked() {
        // 7 bytes but not "YYYY-MM"
        assert!(parse_range("20€-1").is_err());
        assert!(parse_range("2025€09").is_err());
        assert!(parse_range("€€€:€€€").is_err());
    }
}
