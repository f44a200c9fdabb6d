use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create config + database and run migrations.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let db_path = match &cli.db {
        Some(p) => p.clone(),
        None => Config::database_file().to_string_lossy().to_string(),
    };

    let pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;

    success("worklogger initialized.");
    Ok(())
}
