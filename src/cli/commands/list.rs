use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::load_students;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

/// List the student roster.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    let students = load_students(&pool.conn)?;

    if students.is_empty() {
        info("Roster is empty.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("ID", 14),
        Column::new("Name", 24),
        Column::new("Major", 16),
        Column::new("Stage", 6),
        Column::new("Study", 8),
        Column::new("Group", 6),
    ]);

    for s in &students {
        table.add_row(vec![
            s.id.clone(),
            s.name.clone(),
            s.major.clone(),
            s.stage.clone(),
            s.study.to_db_str().to_string(),
            s.group.clone(),
        ]);
    }

    print!("{}", table.render());
    println!("{} students.", students.len());

    Ok(())
}
