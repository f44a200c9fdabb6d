use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DelLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// Delete an entry by position within a date, or by id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date, entry, id } = cmd {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let mut pool = DbPool::new(&cfg.database)?;

        match (id, entry) {
            (Some(id), _) => DelLogic::by_id(&mut pool, id)?,
            (None, Some(n)) => DelLogic::by_index(&mut pool, d, *n)?,
            (None, None) => {
                return Err(AppError::EntryNotFound(
                    "specify --entry N or --id ID".to_string(),
                ))
            }
        }
    }

    Ok(())
}
