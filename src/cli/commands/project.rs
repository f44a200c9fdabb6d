use crate::cli::parser::{Commands, ProjectCommands};
use crate::config::Config;
use crate::core::project::ProjectLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

/// Project registry management.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Project { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            ProjectCommands::Add {
                project_id,
                sub_code,
                title,
                category,
            } => ProjectLogic::add(
                &mut pool,
                project_id.clone(),
                sub_code.clone(),
                title.clone(),
                category.clone(),
            )?,

            ProjectCommands::Del { key } => ProjectLogic::del(&mut pool, key)?,

            ProjectCommands::Archive { key } => ProjectLogic::set_active(&mut pool, key, false)?,

            ProjectCommands::Restore { key } => ProjectLogic::set_active(&mut pool, key, true)?,

            ProjectCommands::List => {
                let projects = ProjectLogic::list(&mut pool)?;
                if projects.is_empty() {
                    info("No projects registered.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::new("Key", 12),
                    Column::new("Title", 24),
                    Column::new("Category", 12),
                    Column::new("Active", 6),
                    Column::new("Used", 5),
                ]);
                for p in &projects {
                    table.add_row(vec![
                        p.key(),
                        p.project_title.clone(),
                        p.category.clone(),
                        if p.is_active { "yes" } else { "no" }.to_string(),
                        p.usage_count.to_string(),
                    ]);
                }
                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
