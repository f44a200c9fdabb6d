use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Restore data from a JSON backup envelope.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        ImportLogic::apply(&mut pool, cfg, file)?;
    }

    Ok(())
}
