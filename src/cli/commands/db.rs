use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{CYAN, GREEN, RED, RESET};
use std::fs;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &mut Config, is_test: bool) -> AppResult<()> {
    if let Commands::Db {
        create,
        use_db,
        list,
        migrate,
        check,
        info: show_info,
    } = cmd
    {
        //
        // 1) CREATE: new database file, selected as current
        //
        if let Some(name) = create {
            let path = cfg.resolve_database(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            let pool = DbPool::new(&path.to_string_lossy())?;
            init_db(&pool.conn)?;
            audit(&pool.conn, "db_create", &path.to_string_lossy(), "Database created")?;
            drop(pool);

            cfg.database = path.to_string_lossy().to_string();
            if !is_test {
                cfg.save()?;
            }

            success(format!("Database created: {}", path.display()));
        }

        //
        // 2) USE: select an existing database
        //
        if let Some(name) = use_db {
            let path = cfg.resolve_database(name);
            if !path.exists() {
                warning(format!("No such database: {}", path.display()));
                return Ok(());
            }

            let pool = DbPool::new(&path.to_string_lossy())?;
            init_db(&pool.conn)?;
            audit(&pool.conn, "db_load", &path.to_string_lossy(), "Database selected")?;
            drop(pool);

            cfg.database = path.to_string_lossy().to_string();
            if !is_test {
                cfg.save()?;
            }

            success(format!("Database loaded: {}", path.display()));
        }

        //
        // 3) LIST
        //
        if *list {
            let names = cfg.list_databases()?;
            if names.is_empty() {
                info("No database files found. Create one with `rollcall db --create <name>`.");
            } else {
                let current = Path::new(&cfg.database)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("");
                for name in names {
                    let marker = if name == current { " (current)" } else { "" };
                    println!("  {}{}", name, marker);
                }
            }
        }

        //
        // 4) MIGRATE
        //
        if *migrate {
            let pool = DbPool::new(&cfg.database)?;
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            run_pending_migrations(&pool.conn)?;
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        //
        // 5) CHECK
        //
        if *check {
            let pool = DbPool::new(&cfg.database)?;

            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 6) INFO
        //
        if *show_info {
            let mut pool = DbPool::new(&cfg.database)?;
            stats::print_db_info(&mut pool, &cfg.database)?;
        }
    }

    Ok(())
}
