use crate::errors::AppResult;
use crate::models::entry::WorkEntry;
use csv::Writer;
use std::collections::HashMap;
use std::path::Path;

/// Fixed CSV column order; importers depend on it.
const HEADER: [&str; 9] = [
    "Date",
    "Day",
    "Type",
    "Project",
    "Category",
    "Hours",
    "Period",
    "Comments",
    "Timestamp",
];

/// Write entries as CSV. `categories` maps project key → category so work
/// rows carry the project's category without a second lookup pass.
pub fn write_csv(
    path: &Path,
    entries: &[WorkEntry],
    categories: &HashMap<String, String>,
) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(HEADER)?;

    for entry in entries {
        let project = entry.project.as_deref().unwrap_or("");
        let category = entry
            .project
            .as_ref()
            .and_then(|key| categories.get(key))
            .map(String::as_str)
            .unwrap_or("");

        wtr.write_record(&[
            entry.date_str(),
            entry.day_name(),
            entry.kind.label().to_string(),
            project.to_string(),
            category.to_string(),
            format_hours(entry.hours),
            entry.period.map(|p| p.label()).unwrap_or("").to_string(),
            entry.comments.clone(),
            entry.created_at.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// "8" rather than "8.0", but keep fractional hours exact ("7.5").
fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{}", hours as i64)
    } else {
        format!("{hours}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_formatting() {
        assert_eq!(format_hours(8.0), "8");
        assert_eq!(format_hours(7.5), "7.5");
        assert_eq!(format_hours(4.0), "4");
    }
}
