use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::recorder::{Recorder, TapOutcome};
use crate::core::selector::ExportSelector;
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::{self, ExportFormat};
use crate::models::study_mode::StudyMode;
use crate::ui::dashboard::Dashboard;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use crate::utils::path::expand_tilde;
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// Interactive tap-in session. Reads one identifier per line from
/// stdin (the card scanner types the id and presses Enter) and holds
/// the session filter for the lifetime of the loop. Lines starting
/// with ':' are operator directives.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session { strict_study } = cmd {
        if !Path::new(&cfg.database).exists() {
            warning(format!(
                "No database loaded ({} not found). Run `rollcall db --create <name>` first.",
                cfg.database
            ));
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let strict = *strict_study || cfg.strict_study_match;
        let mut recorder = Recorder::new(strict);
        let mut dashboard = Dashboard::new();

        audit(&pool.conn, "session_start", &cfg.database, "Tap-in session started")?;
        info(format!("Scanning session started on {}", cfg.database));
        info("Tap a card or type an id. Directives: :status :reset :export [FILE] :load NAME :quit");

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            let input = line.trim();

            if let Some(directive) = input.strip_prefix(':') {
                if run_directive(directive, cfg, &mut pool, &mut recorder, &mut dashboard)? {
                    break;
                }
                continue;
            }

            match recorder.tap(&mut pool, input, date::now())? {
                TapOutcome::Accepted { event, established } => {
                    if established {
                        notify_filter_established(&recorder);
                    }
                    dashboard.append(&event);
                }
                TapOutcome::RejectedMismatch { filter } => {
                    warning(format!(
                        "Filter mismatch: attendance is currently restricted to students with {}",
                        filter
                    ));
                }
                TapOutcome::RejectedDuplicate { name } => {
                    warning(format!(
                        "{} has already been marked as attended today.",
                        name
                    ));
                }
                TapOutcome::Ignored => {} // scanner noise: stay silent
            }
        }

        audit(&pool.conn, "session_end", &cfg.database, "Tap-in session ended")?;
        info("Session closed.");
    }

    Ok(())
}

fn notify_filter_established(recorder: &Recorder) {
    let Some(cohort) = recorder.filter().cohort() else {
        return;
    };

    let both = !recorder.strict_study()
        && matches!(cohort.study, StudyMode::Morning | StudyMode::Hosted);
    if both {
        info(format!(
            "Filters set to: Major={}, Stage={}, Study={} (will include both Morning and Hosted students), Group={}",
            cohort.major,
            cohort.stage,
            cohort.study.to_db_str(),
            cohort.group
        ));
    } else {
        info(format!("Filters set to: {}", cohort));
    }
}

/// Execute one ':' directive. Returns true when the session should end.
fn run_directive(
    directive: &str,
    cfg: &Config,
    pool: &mut DbPool,
    recorder: &mut Recorder,
    dashboard: &mut Dashboard,
) -> AppResult<bool> {
    let mut parts = directive.splitn(2, char::is_whitespace);
    let verb = parts.next().unwrap_or("");
    let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

    match verb {
        "quit" | "q" => return Ok(true),

        "status" => {
            match recorder.filter().cohort() {
                Some(cohort) => info(format!("Session filter: {}", cohort)),
                None => info("Session filter: not set (first accepted tap will set it)"),
            }

            let today = date::today().format("%Y-%m-%d").to_string();
            let count: i64 = pool.conn.query_row(
                "SELECT COUNT(*) FROM attendance WHERE substr(timestamp, 1, 10) = ?1",
                [&today],
                |row| row.get(0),
            )?;
            info(format!("Recorded today: {}", count));
        }

        "reset" => {
            let removed = recorder.reset(pool)?;
            dashboard.clear();
            audit(
                &pool.conn,
                "reset",
                &cfg.database,
                &format!("Attendance cleared ({} events) and filters reset", removed),
            )?;
            success("Attendance data and filters have been reset.");
        }

        "export" => match export_from_session(arg, cfg, pool, recorder) {
            Ok(path) => {
                audit(&pool.conn, "export", &path.to_string_lossy(), "Attendance exported")?;
            }
            Err(AppError::NoFilterSet) => {
                warning("No attendance recorded yet. Cannot determine the filters.");
            }
            Err(AppError::NoMatchingData) => {
                warning("No attendance data found for the current filters.");
            }
            Err(e) => return Err(e),
        },

        "load" => {
            let Some(name) = arg else {
                warning("Usage: :load NAME");
                return Ok(false);
            };

            let path = cfg.resolve_database(name);
            if !path.exists() {
                warning(format!("No such database: {}", path.display()));
                return Ok(false);
            }

            *pool = DbPool::new(&path.to_string_lossy())?;
            init_db(&pool.conn)?;
            audit(&pool.conn, "db_load", &path.to_string_lossy(), "Database selected")?;

            // switching databases unsets the filter; the attendance log
            // stays whatever the new database holds
            recorder.reset_filter();
            dashboard.clear();
            success(format!("Database loaded: {}", path.display()));
        }

        _ => warning(format!("Unknown directive: :{}", verb)),
    }

    Ok(false)
}

/// Run the export selector against the live session filter and write
/// the result. Stdin belongs to the tap stream here, so the overwrite
/// prompt is bypassed.
fn export_from_session(
    arg: Option<&str>,
    cfg: &Config,
    pool: &mut DbPool,
    recorder: &Recorder,
) -> AppResult<PathBuf> {
    let rows = ExportSelector::select(pool, recorder.filter(), recorder.strict_study())?;

    let (path, format) = match arg {
        Some(file) => {
            let path = expand_tilde(file);
            let format = ExportFormat::from_extension(&path).unwrap_or(ExportFormat::Xlsx);
            (path, format)
        }
        None => {
            let cohort = recorder.filter().cohort().ok_or(AppError::NoFilterSet)?;
            let name = export::suggested_filename(cohort, date::today(), recorder.strict_study());
            fs::create_dir_all(&cfg.export_dir)?;
            let path = PathBuf::from(&cfg.export_dir).join(format!("{name}.xlsx"));
            (path, ExportFormat::Xlsx)
        }
    };

    export::write_rows(&rows, format, &path, true)?;
    Ok(path)
}
