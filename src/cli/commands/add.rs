use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::roster::RosterLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Add a single student to the roster.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        id,
        name,
        major,
        stage,
        study,
        group,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let student = RosterLogic::add_student(&mut pool, id, name, major, stage, *study, group)?;

        success(format!(
            "Student added: {} ({}, {}, stage {}, {}, group {})",
            student.name,
            student.id,
            student.major,
            student.stage,
            student.study.to_db_str(),
            student.group
        ));
    }

    Ok(())
}
