use crate::models::session_filter::Cohort;
use chrono::NaiveDate;

/// Suggested export file name: `date_major_stage_studyLabel_group`,
/// where the study label collapses the Morning/Hosted pair to
/// "Morning-Hosted". No extension; the writer appends one per format.
pub fn suggested_filename(cohort: &Cohort, day: NaiveDate, strict_study: bool) -> String {
    format!(
        "{}_{}_{}_{}_{}",
        day.format("%Y-%m-%d"),
        cohort.major,
        cohort.stage,
        cohort.study.export_label(strict_study),
        cohort.group
    )
}
