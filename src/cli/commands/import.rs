use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::roster::RosterLogic;
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

/// Bulk-import students from a delimited file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let summary = RosterLogic::bulk_import(&mut pool, &path)?;

        audit(
            &pool.conn,
            "import",
            &path.to_string_lossy(),
            &format!(
                "Imported {} students ({} duplicates, {} skipped)",
                summary.imported, summary.duplicates, summary.skipped
            ),
        )?;

        success(format!("Successfully imported {} students.", summary.imported));
        if summary.duplicates > 0 {
            warning(format!(
                "{} duplicate entries were skipped.",
                summary.duplicates
            ));
        }
        if summary.skipped > 0 {
            warning(format!(
                "{} malformed or incomplete rows were skipped.",
                summary.skipped
            ));
        }
    }

    Ok(())
}
