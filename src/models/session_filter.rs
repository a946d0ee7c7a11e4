use super::study_mode::StudyMode;
use std::fmt;

/// The (major, stage, study, group) tuple identifying a group of
/// students expected to attend together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cohort {
    pub major: String,
    pub stage: String,
    pub study: StudyMode,
    pub group: String,
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Major={}, Stage={}, Study={}, Group={}",
            self.major,
            self.stage,
            self.study.to_db_str(),
            self.group
        )
    }
}

/// Which cohort's taps are currently accepted. Starts Unset, becomes
/// Set from the first accepted tap, and only reset() or a database
/// switch take it back to Unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionFilter {
    #[default]
    Unset,
    Set(Cohort),
}

impl SessionFilter {
    pub fn is_set(&self) -> bool {
        matches!(self, SessionFilter::Set(_))
    }

    pub fn cohort(&self) -> Option<&Cohort> {
        match self {
            SessionFilter::Unset => None,
            SessionFilter::Set(c) => Some(c),
        }
    }

    pub fn reset(&mut self) {
        *self = SessionFilter::Unset;
    }
}
