use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceEvent, AttendanceRow, TIMESTAMP_FORMAT};
use crate::models::session_filter::Cohort;
use crate::models::student::Student;
use crate::models::study_mode::StudyMode;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, Result, Row, params};

// ---------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------

pub fn map_student_row(row: &Row) -> Result<Student> {
    let study_str: String = row.get("study")?;
    let study = StudyMode::from_db_str(&study_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStudyMode(study_str.clone())),
        )
    })?;

    Ok(Student {
        id: row.get("student_id")?,
        name: row.get("name")?,
        major: row.get("major")?,
        stage: row.get("stage")?,
        study,
        group: row.get("group_name")?,
    })
}

/// Insert a roster entry. A primary-key collision maps to
/// DuplicateStudent so callers can count-and-skip during bulk import.
pub fn insert_student(conn: &Connection, student: &Student) -> AppResult<()> {
    let res = conn.execute(
        "INSERT INTO students (student_id, name, major, stage, study, group_name)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            student.id,
            student.name,
            student.major,
            student.stage,
            student.study.to_db_str(),
            student.group,
        ],
    );

    match res {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Err(AppError::DuplicateStudent(student.id.clone()))
        }
        Err(e) => Err(e.into()),
    }
}

pub fn find_student(conn: &Connection, id: &str) -> AppResult<Option<Student>> {
    let mut stmt = conn.prepare_cached(
        "SELECT student_id, name, major, stage, study, group_name
         FROM students
         WHERE student_id = ?1",
    )?;

    let mut rows = stmt.query_map([id], map_student_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

pub fn load_students(conn: &Connection) -> AppResult<Vec<Student>> {
    let mut stmt = conn.prepare(
        "SELECT student_id, name, major, stage, study, group_name
         FROM students
         ORDER BY major, stage, group_name, name",
    )?;

    let rows = stmt.query_map([], map_student_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------
// Attendance log
// ---------------------------------------------------------------------

/// True iff an attendance event exists for the student on the given
/// calendar day. Matches on the date prefix of the stored timestamp.
pub fn has_attended_on(conn: &Connection, student_id: &str, day: &NaiveDate) -> AppResult<bool> {
    let day_str = day.format("%Y-%m-%d").to_string();

    let mut stmt = conn.prepare_cached(
        "SELECT 1 FROM attendance
         WHERE student_id = ?1 AND substr(timestamp, 1, 10) = ?2
         LIMIT 1",
    )?;

    Ok(stmt.exists(params![student_id, day_str])?)
}

/// Append an attendance event. The caller must have already checked
/// has_attended_on for the same day.
pub fn insert_attendance(
    conn: &Connection,
    student: &Student,
    now: NaiveDateTime,
) -> AppResult<AttendanceEvent> {
    conn.execute(
        "INSERT INTO attendance (student_id, name, major, stage, study, group_name, timestamp, attended)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 1)",
        params![
            student.id,
            student.name,
            student.major,
            student.stage,
            student.study.to_db_str(),
            student.group,
            now.format(TIMESTAMP_FORMAT).to_string(),
        ],
    )?;

    Ok(AttendanceEvent {
        id: conn.last_insert_rowid(),
        student_id: student.id.clone(),
        name: student.name.clone(),
        major: student.major.clone(),
        stage: student.stage.clone(),
        study: student.study,
        group: student.group.clone(),
        timestamp: now,
        attended: true,
    })
}

/// Remove every attendance event. Irreversible.
pub fn clear_attendance(conn: &Connection) -> AppResult<usize> {
    let removed = conn.execute("DELETE FROM attendance", [])?;
    Ok(removed)
}

/// Left outer join of roster students matching the cohort with their
/// attendance events. `studies` is the already-expanded study set
/// (both Morning and Hosted under the compatibility rule). Students
/// with no event still appear, with attended = false and no timestamp.
pub fn attendance_rows_for_cohort(
    conn: &Connection,
    cohort: &Cohort,
    studies: &[StudyMode],
) -> AppResult<Vec<AttendanceRow>> {
    let placeholders = vec!["?"; studies.len()].join(",");
    let sql = format!(
        "SELECT s.name, s.major, s.stage, s.study, s.group_name, a.timestamp, a.attended
         FROM students s
         LEFT JOIN attendance a ON s.student_id = a.student_id
         WHERE s.major = ?1 AND s.stage = ?2 AND s.group_name = ?3
           AND s.study IN ({placeholders})"
    );

    let mut stmt = conn.prepare(&sql)?;

    let mut args: Vec<&dyn rusqlite::ToSql> = vec![
        &cohort.major as &dyn rusqlite::ToSql,
        &cohort.stage,
        &cohort.group,
    ];
    let study_strs: Vec<&str> = studies.iter().map(|s| s.to_db_str()).collect();
    for s in &study_strs {
        args.push(s as &dyn rusqlite::ToSql);
    }

    let rows = stmt.query_map(rusqlite::params_from_iter(args), map_attendance_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn map_attendance_row(row: &Row) -> Result<AttendanceRow> {
    let study_str: String = row.get("study")?;
    let study = StudyMode::from_db_str(&study_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStudyMode(study_str.clone())),
        )
    })?;

    let attended: Option<i64> = row.get("attended")?;

    Ok(AttendanceRow {
        name: row.get("name")?,
        major: row.get("major")?,
        stage: row.get("stage")?,
        study,
        group: row.get("group_name")?,
        timestamp: row.get("timestamp")?,
        attended: attended == Some(1),
    })
}
