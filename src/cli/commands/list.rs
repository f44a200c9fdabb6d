use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_entries, load_projects};
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

/// List entries (default) or the project registry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, projects } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        if *projects {
            return list_projects(&pool);
        }

        let bounds = match period {
            None => None,
            Some(p) => Some(parse_range(p)?),
        };

        let entries = load_entries(&pool.conn, bounds)?;
        if entries.is_empty() {
            info("No entries found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("Date", 10),
            Column::new("Day", 9),
            Column::new("Type", 10),
            Column::new("Project", 12),
            Column::new("Hours", 5),
            Column::new("Period", 6),
            Column::new("Comments", 30),
        ]);

        let mut total = 0.0;
        for e in &entries {
            total += e.hours;
            table.add_row(vec![
                e.date_str(),
                e.day_name(),
                e.kind.label().to_string(),
                e.project.clone().unwrap_or_else(|| "-".to_string()),
                format!("{}", e.hours),
                e.period.map(|p| p.label()).unwrap_or("-").to_string(),
                e.comments.clone(),
            ]);
        }

        print!("{}", table.render());
        println!("\n{} entries, {} hours total.", entries.len(), total);
    }

    Ok(())
}

fn list_projects(pool: &DbPool) -> AppResult<()> {
    let projects = load_projects(&pool.conn)?;
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
    Ok(())
}
