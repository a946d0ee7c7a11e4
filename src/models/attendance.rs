use super::study_mode::StudyMode;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Timestamp layout used everywhere in the attendance table. Sortable
/// as text; the first 10 characters are the calendar date.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One recorded tap. Carries a snapshot of the student's fields at
/// recording time, so the log stays meaningful on its own.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEvent {
    pub id: i64,            // ⇔ attendance.id (AUTOINCREMENT)
    pub student_id: String, // ⇔ attendance.student_id (FK → students)
    pub name: String,
    pub major: String,
    pub stage: String,
    pub study: StudyMode,
    pub group: String,
    pub timestamp: NaiveDateTime, // ⇔ attendance.timestamp (TEXT)
    pub attended: bool,           // always true when the row exists
}

impl AttendanceEvent {
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// One row of the roster ⟕ attendance join used by listing and export.
/// Students with no event for the filter still appear, not attended and
/// with no timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceRow {
    pub name: String,
    pub major: String,
    pub stage: String,
    pub study: StudyMode,
    pub group: String,
    pub timestamp: Option<String>,
    pub attended: bool,
}

impl AttendanceRow {
    pub fn attended_label(&self) -> &'static str {
        if self.attended { "Yes" } else { "No" }
    }
}
