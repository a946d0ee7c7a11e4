#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rc() -> Command {
    cargo_bin_cmd!("rollcall")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rollcall.db", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the database schema through the CLI
pub fn init_db(db_path: &str) {
    rc().args(["--db", db_path, "--test", "db", "--create", db_path])
        .assert()
        .success();
}

/// Add one student through the CLI
pub fn add_student(db_path: &str, id: &str, name: &str, major: &str, stage: &str, study: &str, group: &str) {
    rc().args([
        "--db", db_path, "--test", "add", "--id", id, "--name", name, "--major", major,
        "--stage", stage, "--study", study, "--group", group,
    ])
    .assert()
    .success();
}

/// Initialize DB and add a small roster useful for many tests:
/// two compatible Morning/Hosted students, one other-major student and
/// one Evening student, plus a Morning student who never taps.
pub fn init_db_with_roster(db_path: &str) {
    init_db(db_path);

    add_student(db_path, "S1", "Alice Karim", "CS", "1", "morning", "A");
    add_student(db_path, "S2", "Basim Noor", "CS", "1", "hosted", "A");
    add_student(db_path, "S3", "Caleb Odeh", "EE", "1", "morning", "A");
    add_student(db_path, "S4", "Dana Salem", "CS", "1", "evening", "A");
    add_student(db_path, "S5", "Emil Haddad", "CS", "1", "morning", "A");
}

/// Run a tap-in session feeding the given stdin script.
pub fn run_session(db_path: &str, script: &str) -> assert_cmd::assert::Assert {
    rc().args(["--db", db_path, "--test", "session"])
        .write_stdin(script.to_string())
        .assert()
}
