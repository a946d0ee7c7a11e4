use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `students` table.
fn create_students_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            student_id  TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            major       TEXT NOT NULL,
            stage       TEXT NOT NULL,
            study       TEXT NOT NULL CHECK(study IN ('Morning','Evening','Hosted')),
            group_name  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_students_cohort
            ON students(major, stage, group_name);
        "#,
    )?;
    Ok(())
}

/// Create the `attendance` table. Each row snapshots the student's
/// fields at recording time; `timestamp` is sortable text
/// ("YYYY-MM-DD HH:MM:SS") whose first 10 characters are the date.
fn create_attendance_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            student_id  TEXT NOT NULL,
            name        TEXT NOT NULL,
            major       TEXT NOT NULL,
            stage       TEXT NOT NULL,
            study       TEXT NOT NULL,
            group_name  TEXT NOT NULL,
            timestamp   TEXT NOT NULL,
            attended    INTEGER NOT NULL DEFAULT 1,
            FOREIGN KEY(student_id) REFERENCES students(student_id)
        );

        CREATE INDEX IF NOT EXISTS idx_attendance_student ON attendance(student_id);
        CREATE INDEX IF NOT EXISTS idx_attendance_timestamp ON attendance(timestamp);
        "#,
    )?;
    Ok(())
}

/// Record an applied migration in the log table, once.
fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(false); // already applied
    }

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(true)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db() and by `rollcall db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table first, migrations are tracked there
    ensure_log_table(conn)?;

    // 2) Base schema
    let had_students = table_exists(conn, "students")?;
    create_students_table(conn)?;
    create_attendance_table(conn)?;

    if !had_students {
        mark_applied(conn, "20250412_0001_base_schema", "Created students and attendance tables")?;
    }

    // 3) Indexes were added after the first release; keep them ensured
    //    on every run so older databases pick them up.
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_students_cohort ON students(major, stage, group_name);
        CREATE INDEX IF NOT EXISTS idx_attendance_student ON attendance(student_id);
        CREATE INDEX IF NOT EXISTS idx_attendance_timestamp ON attendance(timestamp);
        "#,
    )?;
    mark_applied(conn, "20250530_0002_lookup_indexes", "Ensured cohort and attendance indexes")?;

    Ok(())
}
