//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Roster errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Student ID already exists: {0}")]
    DuplicateStudent(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid study mode: {0}")]
    InvalidStudyMode(String),

    // ---------------------------
    // Export preconditions
    // ---------------------------
    #[error("No session filter set: no attendance has been recorded yet")]
    NoFilterSet,

    #[error("No attendance data matches the current session filter")]
    NoMatchingData,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
