mod common;
use common::{init_db_with_roster, rc, run_session, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;

#[test]
fn test_db_create_initializes_schema() {
    let db_path = setup_test_db("db_create");

    rc().args(["--db", &db_path, "--test", "db", "--create", &db_path])
        .assert()
        .success()
        .stdout(contains("Database created"));

    // schema is in place: roster listing works on the empty store
    rc().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Roster is empty."));
}

#[test]
fn test_db_check_passes_on_fresh_database() {
    let db_path = setup_test_db("db_check");

    rc().args(["--db", &db_path, "--test", "db", "--create", &db_path])
        .assert()
        .success();

    rc().args(["--db", &db_path, "--test", "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed."));
}

#[test]
fn test_db_info_reports_counts() {
    let db_path = setup_test_db("db_info");
    init_db_with_roster(&db_path);

    run_session(&db_path, "S1\n:quit\n").success();

    rc().args(["--db", &db_path, "--test", "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Students:"))
        .stdout(contains("Attendance events:"));
}

#[test]
fn test_db_migrate_is_idempotent() {
    let db_path = setup_test_db("db_migrate");
    init_db_with_roster(&db_path);

    for _ in 0..2 {
        rc().args(["--db", &db_path, "--test", "db", "--migrate"])
            .assert()
            .success()
            .stdout(contains("Migration completed."));
    }
}

#[test]
fn test_reset_command_requires_confirmation() {
    let db_path = setup_test_db("db_reset_confirm");
    init_db_with_roster(&db_path);

    run_session(&db_path, "S1\n:quit\n").success();

    rc().args(["--db", &db_path, "--test", "reset"])
        .assert()
        .success()
        .stdout(contains("Re-run with --yes to confirm."));

    rc().args(["--db", &db_path, "--test", "reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("Attendance data has been reset (1 events removed)."));
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("db_backup");
    init_db_with_roster(&db_path);

    let out = temp_out("db_backup", "db");

    rc().args(["--db", &db_path, "--test", "backup", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let src_len = fs::metadata(&db_path).unwrap().len();
    let dst_len = fs::metadata(&out).unwrap().len();
    assert_eq!(src_len, dst_len);
}

#[test]
fn test_log_print_records_operations() {
    let db_path = setup_test_db("db_log_print");
    init_db_with_roster(&db_path);

    rc().args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("db_create"))
        .stdout(contains("migration_applied"));
}
