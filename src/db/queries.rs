use crate::errors::{AppError, AppResult};
use crate::models::entry::WorkEntry;
use crate::models::entry_type::EntryType;
use crate::models::period::HalfDayPeriod;
use crate::models::project::Project;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Result, Row};

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

pub fn map_entry_row(row: &Row) -> Result<WorkEntry> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let kind_str: String = row.get("kind")?;
    let kind = EntryType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEntryType(kind_str.clone())),
        )
    })?;

    let period_str: Option<String> = row.get("period")?;
    let period = match period_str {
        None => None,
        Some(p) => Some(HalfDayPeriod::from_db_str(&p).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidPeriod(p.clone())),
            )
        })?),
    };

    Ok(WorkEntry {
        id: row.get("id")?,
        date,
        kind,
        project: row.get("project_key")?,
        hours: row.get("hours")?,
        period,
        comments: row.get("comments")?,
        created_at: row.get("created_at")?,
    })
}

pub fn load_entries_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<WorkEntry>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM entries
         WHERE date = ?1
         ORDER BY created_at ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map([date_str], map_entry_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Load entries, optionally limited to an inclusive date range,
/// ordered by date then insertion order.
pub fn load_entries(
    conn: &Connection,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<WorkEntry>> {
    let mut out = Vec::new();

    match bounds {
        None => {
            let mut stmt = conn.prepare(
                "SELECT * FROM entries
                 ORDER BY date ASC, created_at ASC",
            )?;
            let rows = stmt.query_map([], map_entry_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        Some((start, end)) => {
            let mut stmt = conn.prepare(
                "SELECT * FROM entries
                 WHERE date BETWEEN ?1 AND ?2
                 ORDER BY date ASC, created_at ASC",
            )?;
            let rows = stmt.query_map(
                params![
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string()
                ],
                map_entry_row,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn find_entry(conn: &Connection, id: &str) -> AppResult<Option<WorkEntry>> {
    let mut stmt = conn.prepare("SELECT * FROM entries WHERE id = ?1")?;
    let entry = stmt.query_row([id], map_entry_row).optional()?;
    Ok(entry)
}

pub fn insert_entry(conn: &Connection, entry: &WorkEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO entries (id, date, kind, project_key, hours, period, comments, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            entry.id,
            entry.date_str(),
            entry.kind.to_db_str(),
            entry.project,
            entry.hours,
            entry.period.map(|p| p.to_db_str()),
            entry.comments,
            entry.created_at,
        ],
    )?;
    Ok(())
}

/// Insert-or-replace by id; used when mirroring remote documents or
/// restoring a backup.
pub fn upsert_entry(conn: &Connection, entry: &WorkEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO entries (id, date, kind, project_key, hours, period, comments, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
         ON CONFLICT(id) DO UPDATE SET
             date = excluded.date,
             kind = excluded.kind,
             project_key = excluded.project_key,
             hours = excluded.hours,
             period = excluded.period,
             comments = excluded.comments,
             created_at = excluded.created_at",
        params![
            entry.id,
            entry.date_str(),
            entry.kind.to_db_str(),
            entry.project,
            entry.hours,
            entry.period.map(|p| p.to_db_str()),
            entry.comments,
            entry.created_at,
        ],
    )?;
    Ok(())
}

pub fn delete_entry(conn: &Connection, id: &str) -> AppResult<()> {
    conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
    Ok(())
}

pub fn clear_entries(conn: &Connection) -> AppResult<()> {
    conn.execute("DELETE FROM entries", [])?;
    Ok(())
}

pub fn count_entries(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
    Ok(n)
}

pub fn count_entries_for_project(conn: &Connection, key: &str) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM entries WHERE project_key = ?1",
        [key],
        |row| row.get(0),
    )?;
    Ok(n)
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

pub fn map_project_row(row: &Row) -> Result<Project> {
    Ok(Project {
        id: row.get("id")?,
        project_id: row.get("project_id")?,
        sub_code: row.get("sub_code")?,
        project_title: row.get("project_title")?,
        category: row.get("category")?,
        is_active: row.get::<_, i64>("is_active")? == 1,
        usage_count: row.get("usage_count")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

pub fn load_projects(conn: &Connection) -> AppResult<Vec<Project>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM projects
         ORDER BY project_id ASC, sub_code ASC",
    )?;
    let rows = stmt.query_map([], map_project_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_project_by_key(
    conn: &Connection,
    project_id: &str,
    sub_code: &str,
) -> AppResult<Option<Project>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM projects
         WHERE project_id = ?1 AND sub_code = ?2",
    )?;
    let project = stmt
        .query_row([project_id, sub_code], map_project_row)
        .optional()?;
    Ok(project)
}

pub fn insert_project(conn: &Connection, project: &Project) -> AppResult<()> {
    conn.execute(
        "INSERT INTO projects
             (id, project_id, sub_code, project_title, category,
              is_active, usage_count, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            project.id,
            project.project_id,
            project.sub_code,
            project.project_title,
            project.category,
            project.is_active as i64,
            project.usage_count,
            project.created_at,
            project.updated_at,
        ],
    )?;
    Ok(())
}

/// Insert-or-replace by id; used when mirroring remote documents or
/// restoring a backup.
pub fn upsert_project(conn: &Connection, project: &Project) -> AppResult<()> {
    conn.execute(
        "INSERT INTO projects
             (id, project_id, sub_code, project_title, category,
              is_active, usage_count, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         ON CONFLICT(id) DO UPDATE SET
             project_id = excluded.project_id,
             sub_code = excluded.sub_code,
             project_title = excluded.project_title,
             category = excluded.category,
             is_active = excluded.is_active,
             usage_count = excluded.usage_count,
             created_at = excluded.created_at,
             updated_at = excluded.updated_at",
        params![
            project.id,
            project.project_id,
            project.sub_code,
            project.project_title,
            project.category,
            project.is_active as i64,
            project.usage_count,
            project.created_at,
            project.updated_at,
        ],
    )?;
    Ok(())
}

pub fn delete_project(conn: &Connection, id: &str) -> AppResult<()> {
    conn.execute("DELETE FROM projects WHERE id = ?1", [id])?;
    Ok(())
}

pub fn clear_projects(conn: &Connection) -> AppResult<()> {
    conn.execute("DELETE FROM projects", [])?;
    Ok(())
}

pub fn count_projects(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM projects", [], |row| row.get(0))?;
    Ok(n)
}

/// Shift a project's usage counter as entries referencing it come and go.
pub fn adjust_project_usage(conn: &Connection, key: &str, delta: i64) -> AppResult<()> {
    let (project_id, sub_code) = crate::models::project::Project::split_key(key)
        .ok_or_else(|| AppError::InvalidProjectKey(key.to_string()))?;

    conn.execute(
        "UPDATE projects
         SET usage_count = MAX(usage_count + ?1, 0),
             updated_at = datetime('now')
         WHERE project_id = ?2 AND sub_code = ?3",
        params![delta, project_id, sub_code],
    )?;
    Ok(())
}

/// Recompute every project's usage counter from the entries table.
/// Used after import/pull, where counters from the source may be stale.
pub fn rebuild_project_usage(conn: &Connection) -> AppResult<()> {
    conn.execute(
        "UPDATE projects
         SET usage_count = (
             SELECT COUNT(*) FROM entries
             WHERE entries.project_key = projects.project_id || '-' || projects.sub_code
         )",
        [],
    )?;
    Ok(())
}
