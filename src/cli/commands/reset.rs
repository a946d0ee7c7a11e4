use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::clear_attendance;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Clear all attendance events. Irreversible, so it wants `--yes`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes {
            warning("This removes every attendance event. Re-run with --yes to confirm.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let removed = clear_attendance(&pool.conn)?;
        audit(
            &pool.conn,
            "reset",
            &cfg.database,
            &format!("Attendance cleared ({} events)", removed),
        )?;

        success(format!("Attendance data has been reset ({} events removed).", removed));
    }

    Ok(())
}
