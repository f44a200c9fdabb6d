use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sync::SyncLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Push (default), pull, or report sync status.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sync { pull, status } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        if *status {
            let (state, pending, last) = SyncLogic::status(&pool, cfg)?;
            info(format!("Sync status:      {state}"));
            info(format!(
                "Pending changes:  {}",
                if pending { "yes" } else { "no" }
            ));
            info(format!(
                "Last sync:        {}",
                last.as_deref().unwrap_or("never")
            ));
            return Ok(());
        }

        let report = if *pull {
            SyncLogic::pull(&mut pool, cfg)?
        } else {
            SyncLogic::push(&mut pool, cfg)?
        };

        info(format!("Sync status: {}", report.status));
    }

    Ok(())
}
