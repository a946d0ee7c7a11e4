use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::selector::ExportSelector;
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::{self, ExportFormat};
use crate::models::session_filter::{Cohort, SessionFilter};
use crate::ui::messages::warning;
use crate::utils::date;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::PathBuf;

/// Export attendance for an explicitly supplied cohort. Runs the same
/// selector the in-session `:export` directive uses.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        major,
        stage,
        study,
        group,
        format,
        file,
        strict_study,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let strict = *strict_study || cfg.strict_study_match;
        let filter = SessionFilter::Set(Cohort {
            major: major.trim().to_string(),
            stage: stage.trim().to_string(),
            study: *study,
            group: group.trim().to_string(),
        });

        let rows = match ExportSelector::select(&mut pool, &filter, strict) {
            Ok(rows) => rows,
            Err(AppError::NoMatchingData) => {
                warning("No attendance data found for the given filters.");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let (path, fmt) = resolve_output(cfg, &filter, file.as_deref(), *format, strict)?;

        export::write_rows(&rows, fmt, &path, *force)?;
        audit(&pool.conn, "export", &path.to_string_lossy(), "Attendance exported")?;
    }

    Ok(())
}

fn resolve_output(
    cfg: &Config,
    filter: &SessionFilter,
    file: Option<&str>,
    format: Option<ExportFormat>,
    strict: bool,
) -> AppResult<(PathBuf, ExportFormat)> {
    match file {
        Some(f) => {
            let path = expand_tilde(f);
            let fmt = format
                .or_else(|| ExportFormat::from_extension(&path))
                .unwrap_or(ExportFormat::Xlsx);
            Ok((path, fmt))
        }
        None => {
            let cohort = filter.cohort().ok_or(AppError::NoFilterSet)?;
            let fmt = format.unwrap_or(ExportFormat::Xlsx);
            let name = export::suggested_filename(cohort, date::today(), strict);
            fs::create_dir_all(&cfg.export_dir)?;
            let path = PathBuf::from(&cfg.export_dir).join(format!("{}.{}", name, fmt.as_str()));
            Ok((path, fmt))
        }
    }
}
