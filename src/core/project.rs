use crate::db::pool::DbPool;
use crate::db::queries::{
    count_entries_for_project, delete_project, find_project_by_key, insert_project, load_projects,
    upsert_project,
};
use crate::db::{log, meta};
use crate::errors::{AppError, AppResult};
use crate::models::project::Project;
use crate::ui::messages::success;
use chrono::Local;

/// High-level business logic for the `project` commands.
pub struct ProjectLogic;

impl ProjectLogic {
    pub fn add(
        pool: &mut DbPool,
        project_id: String,
        sub_code: String,
        title: String,
        category: String,
    ) -> AppResult<()> {
        let conn = &pool.conn;

        if find_project_by_key(conn, &project_id, &sub_code)?.is_some() {
            return Err(AppError::DuplicateProject(format!(
                "{project_id}-{sub_code}"
            )));
        }

        let project = Project::new(project_id, sub_code, title, category);
        insert_project(conn, &project)?;
        meta::set_pending_changes(conn, true)?;
        log::wlog(conn, "add_project", &project.id, &project.key())?;

        success(format!(
            "Added project {} — {}.",
            project.key(),
            project.project_title
        ));
        Ok(())
    }

    /// Delete a project; rejected while any entry still references it.
    pub fn del(pool: &mut DbPool, key: &str) -> AppResult<()> {
        let conn = &pool.conn;
        let project = Self::lookup(pool, key)?;

        let refs = count_entries_for_project(conn, key)?;
        if refs > 0 {
            return Err(AppError::ProjectInUse {
                key: key.to_string(),
                count: refs,
            });
        }

        delete_project(conn, &project.id)?;
        meta::set_pending_changes(conn, true)?;
        log::wlog(conn, "del_project", &project.id, key)?;

        success(format!("Deleted project {}.", key));
        Ok(())
    }

    /// Archive (or restore) a project: archived projects keep their history
    /// but cannot be booked against.
    pub fn set_active(pool: &mut DbPool, key: &str, active: bool) -> AppResult<()> {
        let mut project = Self::lookup(pool, key)?;

        project.is_active = active;
        project.updated_at = Local::now().to_rfc3339();
        upsert_project(&pool.conn, &project)?;
        meta::set_pending_changes(&pool.conn, true)?;
        log::wlog(
            &pool.conn,
            if active { "restore_project" } else { "archive_project" },
            &project.id,
            key,
        )?;

        success(format!(
            "{} project {}.",
            if active { "Restored" } else { "Archived" },
            key
        ));
        Ok(())
    }

    pub fn list(pool: &mut DbPool) -> AppResult<Vec<Project>> {
        load_projects(&pool.conn)
    }

    fn lookup(pool: &DbPool, key: &str) -> AppResult<Project> {
        let (pid, sub) =
            Project::split_key(key).ok_or_else(|| AppError::InvalidProjectKey(key.to_string()))?;
        find_project_by_key(&pool.conn, pid, sub)?
            .ok_or_else(|| AppError::ProjectNotFound(key.to_string()))
    }
}
