use crate::db::pool::DbPool;
use crate::db::queries::attendance_rows_for_cohort;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceRow;
use crate::models::session_filter::SessionFilter;

/// Export selector: computes the roster ⟕ attendance subset matching
/// the session filter, for hand-off to an export writer.
pub struct ExportSelector;

impl ExportSelector {
    /// Rows for the current filter, in join order.
    ///
    /// Fails with NoFilterSet while the filter is Unset and with
    /// NoMatchingData when the join comes back empty. Major, stage and
    /// group match exactly; the study set follows the same
    /// Morning/Hosted compatibility rule the recorder applies.
    pub fn select(
        pool: &mut DbPool,
        filter: &SessionFilter,
        strict_study: bool,
    ) -> AppResult<Vec<AttendanceRow>> {
        let cohort = filter.cohort().ok_or(AppError::NoFilterSet)?;

        let studies = cohort.study.export_set(strict_study);
        let rows = attendance_rows_for_cohort(&pool.conn, cohort, &studies)?;

        if rows.is_empty() {
            return Err(AppError::NoMatchingData);
        }

        Ok(rows)
    }
}
