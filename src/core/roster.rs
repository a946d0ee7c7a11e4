use crate::db::pool::DbPool;
use crate::db::queries::insert_student;
use crate::errors::{AppError, AppResult};
use crate::models::student::Student;
use crate::models::study_mode::StudyMode;
use std::path::Path;

/// Outcome of a bulk import run.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImportSummary {
    pub imported: usize,
    pub duplicates: usize,
    pub skipped: usize,
}

/// High-level roster operations: manual add and bulk import.
pub struct RosterLogic;

impl RosterLogic {
    /// Add a single student. All six fields are required; a duplicate
    /// id aborts with no partial write.
    pub fn add_student(
        pool: &mut DbPool,
        id: &str,
        name: &str,
        major: &str,
        stage: &str,
        study: StudyMode,
        group: &str,
    ) -> AppResult<Student> {
        let student = Student::new(id, name, major, stage, study, group)?;
        insert_student(&pool.conn, &student)?;
        Ok(student)
    }

    /// Import students from a delimited file with a header row and six
    /// columns in fixed order: id, name, major, stage, study, group.
    ///
    /// Malformed or incomplete rows are skipped silently, duplicate ids
    /// are counted and skipped; the run never aborts mid-file.
    pub fn bulk_import(pool: &mut DbPool, file: &Path) -> AppResult<ImportSummary> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(file)?;

        let mut summary = ImportSummary::default();

        for record in reader.records() {
            let Ok(record) = record else {
                summary.skipped += 1;
                continue;
            };

            let Some(candidate) = parse_row(&record) else {
                summary.skipped += 1;
                continue;
            };

            match insert_student(&pool.conn, &candidate) {
                Ok(()) => summary.imported += 1,
                Err(AppError::DuplicateStudent(_)) => summary.duplicates += 1,
                Err(e) => return Err(e),
            }
        }

        Ok(summary)
    }
}

/// A row is usable only when all six cells are present and non-empty
/// and the study cell names a known mode.
fn parse_row(record: &csv::StringRecord) -> Option<Student> {
    if record.len() < 6 {
        return None;
    }

    let study = StudyMode::from_input(record.get(4)?)?;

    Student::new(
        record.get(0)?,
        record.get(1)?,
        record.get(2)?,
        record.get(3)?,
        study,
        record.get(5)?,
    )
    .ok()
}
