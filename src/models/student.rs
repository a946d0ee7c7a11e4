use super::session_filter::Cohort;
use super::study_mode::StudyMode;
use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// A roster entry. Identity is `id`; records are immutable once created
/// (there is no update or delete path).
#[derive(Debug, Clone, Serialize)]
pub struct Student {
    pub id: String,         // ⇔ students.student_id (TEXT PK)
    pub name: String,       // ⇔ students.name
    pub major: String,      // ⇔ students.major
    pub stage: String,      // ⇔ students.stage
    pub study: StudyMode,   // ⇔ students.study ('Morning'|'Evening'|'Hosted')
    pub group: String,      // ⇔ students.group_name
}

impl Student {
    pub fn new(
        id: &str,
        name: &str,
        major: &str,
        stage: &str,
        study: StudyMode,
        group: &str,
    ) -> AppResult<Self> {
        let student = Self {
            id: id.trim().to_string(),
            name: name.trim().to_string(),
            major: major.trim().to_string(),
            stage: stage.trim().to_string(),
            study,
            group: group.trim().to_string(),
        };
        student.require_fields()?;
        Ok(student)
    }

    /// All six fields are required; a blank one aborts the add with no
    /// partial write.
    fn require_fields(&self) -> AppResult<()> {
        for (field, value) in [
            ("id", &self.id),
            ("name", &self.name),
            ("major", &self.major),
            ("stage", &self.stage),
            ("group", &self.group),
        ] {
            if value.is_empty() {
                return Err(AppError::MissingField(field.to_string()));
            }
        }
        Ok(())
    }

    /// The (major, stage, study, group) tuple this student belongs to.
    pub fn cohort(&self) -> Cohort {
        Cohort {
            major: self.major.clone(),
            stage: self.stage.clone(),
            study: self.study,
            group: self.group.clone(),
        }
    }
}
