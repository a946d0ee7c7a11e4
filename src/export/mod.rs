mod excel_date;
mod filename;
mod fs_utils;
mod json_csv;
mod model;
mod xlsx;

pub use filename::suggested_filename;
pub use model::{get_headers, row_to_record};

pub(crate) use fs_utils::ensure_writable;

use crate::errors::AppResult;
use crate::models::attendance::AttendanceRow;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for export writers.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Infer a format from a file extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            "xlsx" => Some(ExportFormat::Xlsx),
            _ => None,
        }
    }
}

/// Write rows in the given format, after the overwrite check.
pub fn write_rows(
    rows: &[AttendanceRow],
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => json_csv::export_csv(rows, path),
        ExportFormat::Json => json_csv::export_json(rows, path),
        ExportFormat::Xlsx => xlsx::export_xlsx(rows, path),
    }
}
