mod common;
use common::{init_db_with_roster, rc, run_session, setup_test_db, temp_out};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

#[test]
fn test_session_first_tap_sets_filter_and_records() {
    let db_path = setup_test_db("session_first_tap");
    init_db_with_roster(&db_path);

    run_session(&db_path, "S1\n:quit\n")
        .success()
        .stdout(contains("Filters set to: Major=CS, Stage=1, Study=Morning"))
        .stdout(contains("will include both Morning and Hosted students"))
        .stdout(contains("Alice Karim"));
}

#[test]
fn test_session_accepts_hosted_under_morning_filter() {
    let db_path = setup_test_db("session_hosted");
    init_db_with_roster(&db_path);

    run_session(&db_path, "S1\nS2\n:quit\n")
        .success()
        .stdout(contains("Alice Karim"))
        .stdout(contains("Basim Noor"));
}

#[test]
fn test_session_rejects_duplicate_same_day() {
    let db_path = setup_test_db("session_duplicate");
    init_db_with_roster(&db_path);

    run_session(&db_path, "S1\nS1\n:quit\n")
        .success()
        .stdout(contains("Alice Karim has already been marked as attended today."));
}

#[test]
fn test_session_rejects_filter_mismatch() {
    let db_path = setup_test_db("session_mismatch");
    init_db_with_roster(&db_path);

    // S3 is another major, S4 is the Evening cohort
    run_session(&db_path, "S1\nS3\nS4\n:quit\n")
        .success()
        .stdout(contains("Filter mismatch"))
        .stdout(contains("Caleb Odeh").not())
        .stdout(contains("Dana Salem").not());
}

#[test]
fn test_session_unknown_and_blank_input_stay_silent() {
    let db_path = setup_test_db("session_silent");
    init_db_with_roster(&db_path);

    run_session(&db_path, "\nX1\n:quit\n")
        .success()
        .stdout(contains("Filter mismatch").not())
        .stdout(contains("already been marked").not())
        .stdout(contains("Filters set to").not());
}

#[test]
fn test_session_strict_study_rejects_hosted() {
    let db_path = setup_test_db("session_strict");
    init_db_with_roster(&db_path);

    rc().args(["--db", &db_path, "--test", "session", "--strict-study"])
        .write_stdin("S1\nS2\n:quit\n")
        .assert()
        .success()
        .stdout(contains("Filter mismatch"))
        .stdout(contains("Basim Noor").not());
}

#[test]
fn test_session_status_directive() {
    let db_path = setup_test_db("session_status");
    init_db_with_roster(&db_path);

    run_session(&db_path, ":status\nS1\n:status\n:quit\n")
        .success()
        .stdout(contains("Session filter: not set"))
        .stdout(contains("Session filter: Major=CS, Stage=1, Study=Morning, Group=A"));
}

#[test]
fn test_session_reset_clears_filter_and_log() {
    let db_path = setup_test_db("session_reset");
    init_db_with_roster(&db_path);

    // after the reset the EE student establishes a fresh filter
    run_session(&db_path, "S1\n:reset\nS3\n:quit\n")
        .success()
        .stdout(contains("Attendance data and filters have been reset."))
        .stdout(contains("Filters set to: Major=EE"))
        .stdout(contains("Caleb Odeh"));
}

#[test]
fn test_session_filter_survives_process_restart_reset() {
    // Filter state is process-lifetime: a second session starts Unset
    // even though the log still holds the first session's events.
    let db_path = setup_test_db("session_restart");
    init_db_with_roster(&db_path);

    run_session(&db_path, "S1\n:quit\n").success();

    // S3 (other major) is now accepted: the new process has no filter yet
    run_session(&db_path, "S3\n:quit\n")
        .success()
        .stdout(contains("Filters set to: Major=EE"))
        .stdout(contains("Caleb Odeh"));
}

#[test]
fn test_session_export_directive_writes_csv() {
    let db_path = setup_test_db("session_export");
    init_db_with_roster(&db_path);

    let out = temp_out("session_export", "csv");

    run_session(&db_path, &format!("S1\nS2\n:export {}\n:quit\n", out)).success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("Name,Major,Stage,Study,Group,Timestamp,Attended"));
    assert!(content.contains("Alice Karim"));
    assert!(content.contains("Basim Noor"));
    // the Morning student who never tapped still appears, not attended
    assert!(content.contains("Emil Haddad"));
    assert!(content.contains("No"));
}

#[test]
fn test_session_export_without_filter_warns() {
    let db_path = setup_test_db("session_export_nofilter");
    init_db_with_roster(&db_path);

    run_session(&db_path, ":export\n:quit\n")
        .success()
        .stdout(contains("No attendance recorded yet. Cannot determine the filters."));
}

#[test]
fn test_session_load_directive_resets_filter_only() {
    let db_a = setup_test_db("session_load_a");
    init_db_with_roster(&db_a);

    let db_b = setup_test_db("session_load_b");
    init_db_with_roster(&db_b);

    // record S1 in A, switch to B, then the EE student sets B's filter
    let script = format!("S1\n:load {}\nS3\n:quit\n", db_b);
    run_session(&db_a, &script)
        .success()
        .stdout(contains("Database loaded:"))
        .stdout(contains("Filters set to: Major=EE"));
}

#[test]
fn test_session_writes_audit_log() {
    let db_path = setup_test_db("session_audit");
    init_db_with_roster(&db_path);

    run_session(&db_path, "S1\n:quit\n").success();

    rc().args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("session_start"))
        .stdout(contains("session_end"));
}
