use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry_type::EntryType;
use crate::models::period::HalfDayPeriod;
use crate::utils::date;

/// Add a validated work/leave entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        entry_type,
        project,
        hours,
        period,
        comments,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let kind = EntryType::from_code(entry_type)
            .ok_or_else(|| AppError::InvalidEntryType(entry_type.to_string()))?;

        let period_parsed = match period {
            Some(p) => Some(
                HalfDayPeriod::from_code(p)
                    .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?,
            ),
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;

        AddLogic::apply(
            &mut pool,
            cfg,
            d,
            kind,
            project.clone(),
            *hours,
            period_parsed,
            comments.clone(),
        )?;
    }

    Ok(())
}
