use crate::db::pool::DbPool;
use crate::db::queries::{clear_attendance, find_student, has_attended_on, insert_attendance};
use crate::errors::AppResult;
use crate::models::attendance::AttendanceEvent;
use crate::models::session_filter::{Cohort, SessionFilter};
use chrono::NaiveDateTime;

/// Result of a single tap. The recorder only decides; surfacing a
/// notice (or staying silent) is the caller's business.
#[derive(Debug)]
pub enum TapOutcome {
    /// Event recorded. `established` marks the tap that populated the
    /// session filter.
    Accepted {
        event: AttendanceEvent,
        established: bool,
    },
    /// Student exists but does not belong to the session cohort.
    RejectedMismatch { filter: Cohort },
    /// Student already has an event for today.
    RejectedDuplicate { name: String },
    /// Blank input or unknown id. Scanner noise, not worth a notice.
    Ignored,
}

/// Attendance recorder: owns the session filter and applies the
/// acceptance algorithm to each tapped identifier.
///
/// The filter is populated from the first accepted tap and stays fixed
/// until reset() or a database switch, no matter how many taps are
/// rejected afterwards.
pub struct Recorder {
    filter: SessionFilter,
    strict_study: bool,
}

impl Recorder {
    pub fn new(strict_study: bool) -> Self {
        Self {
            filter: SessionFilter::Unset,
            strict_study,
        }
    }

    pub fn filter(&self) -> &SessionFilter {
        &self.filter
    }

    pub fn strict_study(&self) -> bool {
        self.strict_study
    }

    /// Unset the filter only. Used when switching databases: the
    /// attendance log stays whatever the new database holds.
    pub fn reset_filter(&mut self) {
        self.filter.reset();
    }

    /// Full reset: wipe the attendance log and unset the filter.
    pub fn reset(&mut self, pool: &mut DbPool) -> AppResult<usize> {
        let removed = clear_attendance(&pool.conn)?;
        self.filter.reset();
        Ok(removed)
    }

    /// Run the acceptance algorithm for one tapped identifier.
    ///
    /// A rejected tap leaves both the filter and the log untouched; in
    /// particular the duplicate check runs before an Unset filter is
    /// populated, so no rejection ever commits a filter transition.
    pub fn tap(
        &mut self,
        pool: &mut DbPool,
        tagged_id: &str,
        now: NaiveDateTime,
    ) -> AppResult<TapOutcome> {
        let tag = tagged_id.trim();
        if tag.is_empty() {
            return Ok(TapOutcome::Ignored);
        }

        let Some(student) = find_student(&pool.conn, tag)? else {
            return Ok(TapOutcome::Ignored);
        };

        if let SessionFilter::Set(cohort) = &self.filter {
            let exact_mismatch = student.major != cohort.major
                || student.stage != cohort.stage
                || student.group != cohort.group;
            if exact_mismatch || !cohort.study.accepts(student.study, self.strict_study) {
                return Ok(TapOutcome::RejectedMismatch {
                    filter: cohort.clone(),
                });
            }
        }

        if has_attended_on(&pool.conn, &student.id, &now.date())? {
            return Ok(TapOutcome::RejectedDuplicate {
                name: student.name.clone(),
            });
        }

        let established = !self.filter.is_set();
        if established {
            self.filter = SessionFilter::Set(student.cohort());
        }

        let event = insert_attendance(&pool.conn, &student, now)?;
        Ok(TapOutcome::Accepted { event, established })
    }
}
