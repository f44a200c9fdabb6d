use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists; it doubles as the migration journal.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Base schema: entries, projects and meta tables.
fn migrate_base_schema(conn: &Connection) -> Result<()> {
    let version = "20250301_0001_base_schema";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id          TEXT PRIMARY KEY,
            date        TEXT NOT NULL,
            kind        TEXT NOT NULL CHECK(kind IN ('work','full-leave','half-leave','holiday')),
            project_key TEXT,
            hours       REAL NOT NULL DEFAULT 0,
            period      TEXT CHECK(period IN ('am','pm') OR period IS NULL),
            comments    TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);
        CREATE INDEX IF NOT EXISTS idx_entries_project ON entries(project_key);

        CREATE TABLE IF NOT EXISTS projects (
            id            TEXT PRIMARY KEY,
            project_id    TEXT NOT NULL,
            sub_code      TEXT NOT NULL,
            project_title TEXT NOT NULL DEFAULT '',
            category      TEXT NOT NULL DEFAULT '',
            is_active     INTEGER NOT NULL DEFAULT 1,
            usage_count   INTEGER NOT NULL DEFAULT 0,
            created_at    TEXT NOT NULL,
            updated_at    TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_projects_key ON projects(project_id, sub_code);

        CREATE TABLE IF NOT EXISTS meta (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;

    mark_applied(conn, version, "Created entries, projects and meta tables")?;
    success("Created work-log schema.");
    Ok(())
}

/// Seed meta defaults (dirty flag off, schema version).
fn migrate_seed_meta(conn: &Connection) -> Result<()> {
    let version = "20250301_0002_seed_meta";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        INSERT OR IGNORE INTO meta (key, value) VALUES ('pending_changes', '0');
        INSERT OR IGNORE INTO meta (key, value) VALUES ('schema_version', '1');
        "#,
    )?;

    mark_applied(conn, version, "Seeded meta defaults")?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    migrate_base_schema(conn)?;
    migrate_seed_meta(conn)?;
    Ok(())
}
