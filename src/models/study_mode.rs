use clap::ValueEnum;
use serde::Serialize;

/// Study mode of a student. Morning and Hosted are administratively
/// equivalent cohorts (a hosted intake folded into the morning one);
/// Evening is always disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum StudyMode {
    Morning,
    Evening,
    Hosted,
}

impl StudyMode {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            StudyMode::Morning => "Morning",
            StudyMode::Evening => "Evening",
            StudyMode::Hosted => "Hosted",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Morning" => Some(StudyMode::Morning),
            "Evening" => Some(StudyMode::Evening),
            "Hosted" => Some(StudyMode::Hosted),
            _ => None,
        }
    }

    /// Helper: convert free-form input (any casing)
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Some(StudyMode::Morning),
            "evening" => Some(StudyMode::Evening),
            "hosted" => Some(StudyMode::Hosted),
            _ => None,
        }
    }

    /// Whether a tap with mode `other` is accepted against a filter set
    /// to `self`. With `strict` the modes must be identical; otherwise
    /// Morning and Hosted accept each other and Evening only itself.
    pub fn accepts(self, other: StudyMode, strict: bool) -> bool {
        if self == other {
            return true;
        }
        if strict {
            return false;
        }
        matches!(
            (self, other),
            (StudyMode::Morning, StudyMode::Hosted) | (StudyMode::Hosted, StudyMode::Morning)
        )
    }

    /// The set of modes an export for this filter value must include.
    pub fn export_set(self, strict: bool) -> Vec<StudyMode> {
        if !strict && matches!(self, StudyMode::Morning | StudyMode::Hosted) {
            vec![StudyMode::Morning, StudyMode::Hosted]
        } else {
            vec![self]
        }
    }

    /// Label used in export file names: `Morning-Hosted` for the
    /// compatible pair, the plain mode name otherwise.
    pub fn export_label(self, strict: bool) -> &'static str {
        if !strict && matches!(self, StudyMode::Morning | StudyMode::Hosted) {
            "Morning-Hosted"
        } else {
            self.to_db_str()
        }
    }
}
