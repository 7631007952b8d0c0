use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_employee, local_rfc3339, rtc, setup_state};

#[test]
fn test_full_day_flow_with_break() {
    let state = setup_state("full_day_flow");
    add_employee(&state, "Ana", "full");

    rtc()
        .args(["--state", &state, "--test", "in", "--at", &local_rfc3339(2026, 3, 2, 9, 0)])
        .assert()
        .success()
        .stdout(contains("Ana clocked in"));

    rtc()
        .args(["--state", &state, "--test", "break", "start", "--at", &local_rfc3339(2026, 3, 2, 12, 0)])
        .assert()
        .success()
        .stdout(contains("Break started"));

    rtc()
        .args(["--state", &state, "--test", "break", "end", "--at", &local_rfc3339(2026, 3, 2, 12, 30)])
        .assert()
        .success()
        .stdout(contains("(30 min)"));

    rtc()
        .args(["--state", &state, "--test", "out", "--at", &local_rfc3339(2026, 3, 2, 17, 0)])
        .assert()
        .success()
        .stdout(contains("Ana clocked out"))
        .stdout(contains("Break 00:30"))
        .stdout(contains("Worked 07:30"));
}

#[test]
fn test_status_reflects_break_state() {
    let state = setup_state("status_break");
    add_employee(&state, "Ana", "full");

    rtc()
        .args(["--state", &state, "--test", "in", "--at", &local_rfc3339(2026, 3, 2, 9, 0)])
        .assert()
        .success();

    rtc()
        .args(["--state", &state, "--test", "status", "--at", &local_rfc3339(2026, 3, 2, 10, 0)])
        .assert()
        .success()
        .stdout(contains("Working"))
        .stdout(contains("01:00:00"));

    rtc()
        .args(["--state", &state, "--test", "break", "start", "--at", &local_rfc3339(2026, 3, 2, 12, 0)])
        .assert()
        .success();

    // while on break the elapsed time is frozen at 3h
    rtc()
        .args(["--state", &state, "--test", "status", "--at", &local_rfc3339(2026, 3, 2, 12, 20)])
        .assert()
        .success()
        .stdout(contains("OnBreak"))
        .stdout(contains("03:00:00"));
}

#[test]
fn test_commands_fail_without_session_or_employee() {
    let state = setup_state("preconditions");

    rtc()
        .args(["--state", &state, "--test", "in"])
        .assert()
        .failure()
        .stderr(contains("No employee selected"));

    add_employee(&state, "Ana", "full");

    rtc()
        .args(["--state", &state, "--test", "out"])
        .assert()
        .failure()
        .stderr(contains("No active session"));

    rtc()
        .args(["--state", &state, "--test", "break", "end"])
        .assert()
        .failure()
        .stderr(contains("No active session"));
}

#[test]
fn test_double_clock_in_is_rejected() {
    let state = setup_state("double_in");
    add_employee(&state, "Ana", "full");

    rtc()
        .args(["--state", &state, "--test", "in", "--at", &local_rfc3339(2026, 3, 2, 9, 0)])
        .assert()
        .success();

    rtc()
        .args(["--state", &state, "--test", "in", "--at", &local_rfc3339(2026, 3, 2, 10, 0)])
        .assert()
        .failure()
        .stderr(contains("already open"));
}

#[test]
fn test_clock_out_before_clock_in_is_rejected() {
    let state = setup_state("skewed_out");
    add_employee(&state, "Ana", "full");

    rtc()
        .args(["--state", &state, "--test", "in", "--at", &local_rfc3339(2026, 3, 2, 9, 0)])
        .assert()
        .success();

    rtc()
        .args(["--state", &state, "--test", "out", "--at", &local_rfc3339(2026, 3, 2, 8, 0)])
        .assert()
        .failure()
        .stderr(contains("Invalid time range"));

    // the session survived the rejected command
    rtc()
        .args(["--state", &state, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("Working"));
}

#[test]
fn test_employee_list_and_select() {
    let state = setup_state("roster");
    let ana_id = add_employee(&state, "Ana", "full");
    add_employee(&state, "Bob", "half");

    rtc()
        .args(["--state", &state, "--test", "employee", "list"])
        .assert()
        .success()
        .stdout(contains("Ana"))
        .stdout(contains("Bob *"))
        .stdout(contains("Full time"))
        .stdout(contains("Half time"));

    rtc()
        .args(["--state", &state, "--test", "employee", "select", &ana_id])
        .assert()
        .success()
        .stdout(contains("Selected employee Ana"));

    rtc()
        .args(["--state", &state, "--test", "employee", "select", "nope"])
        .assert()
        .failure()
        .stderr(contains("Unknown employee"));
}

#[test]
fn test_invalid_schedule_is_rejected() {
    let state = setup_state("bad_schedule");

    rtc()
        .args(["--state", &state, "--test", "employee", "add", "Ana", "--schedule", "double"])
        .assert()
        .failure()
        .stderr(contains("Invalid schedule kind"));
}

#[test]
fn test_today_summary_with_surplus() {
    let state = setup_state("today_summary");
    add_employee(&state, "Ana", "half");

    rtc()
        .args(["--state", &state, "--test", "in", "--at", &local_rfc3339(2026, 3, 2, 9, 0)])
        .assert()
        .success();
    rtc()
        .args(["--state", &state, "--test", "out", "--at", &local_rfc3339(2026, 3, 2, 14, 0)])
        .assert()
        .success();

    // 5h worked against a 4h half schedule: +1h surplus
    rtc()
        .args(["--state", &state, "--test", "today", "--at", &local_rfc3339(2026, 3, 2, 14, 0)])
        .assert()
        .success()
        .stdout(contains("Worked 05:00"))
        .stdout(contains("Expected 04:00"))
        .stdout(contains("Surplus +01:00"));
}

#[test]
fn test_history_groups_by_date() {
    let state = setup_state("history_grouping");
    add_employee(&state, "Ana", "full");

    for day in [2u32, 3] {
        rtc()
            .args(["--state", &state, "--test", "in", "--at", &local_rfc3339(2026, 3, day, 9, 0)])
            .assert()
            .success();
        rtc()
            .args(["--state", &state, "--test", "out", "--at", &local_rfc3339(2026, 3, day, 17, 0)])
            .assert()
            .success();
    }

    rtc()
        .args(["--state", &state, "--test", "history"])
        .assert()
        .success()
        .stdout(contains("2026-03-02"))
        .stdout(contains("2026-03-03"))
        .stdout(contains("Worked"))
        .stdout(contains("08:00"));

    // --period narrows the listing to a single date
    rtc()
        .args(["--state", &state, "--test", "history", "--period", "2026-03-02"])
        .assert()
        .success()
        .stdout(contains("2026-03-02"))
        .stdout(contains("2026-03-03").not());

    rtc()
        .args(["--state", &state, "--test", "history", "--period", "03/02/2026"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_history_clear_requires_confirmation() {
    let state = setup_state("history_clear");
    add_employee(&state, "Ana", "full");

    rtc()
        .args(["--state", &state, "--test", "in", "--at", &local_rfc3339(2026, 3, 2, 9, 0)])
        .assert()
        .success();
    rtc()
        .args(["--state", &state, "--test", "out", "--at", &local_rfc3339(2026, 3, 2, 17, 0)])
        .assert()
        .success();

    // declined: records stay
    rtc()
        .args(["--state", &state, "--test", "history", "--clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Aborted"));

    rtc()
        .args(["--state", &state, "--test", "history"])
        .assert()
        .success()
        .stdout(contains("2026-03-02"));

    // confirmed: records gone
    rtc()
        .args(["--state", &state, "--test", "history", "--clear"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("History cleared"));

    rtc()
        .args(["--state", &state, "--test", "history"])
        .assert()
        .success()
        .stdout(contains("No history records yet"));
}

#[test]
fn test_open_session_survives_process_restarts() {
    let state = setup_state("restart_recovery");
    add_employee(&state, "Ana", "full");

    rtc()
        .args(["--state", &state, "--test", "in", "--at", &local_rfc3339(2026, 3, 2, 9, 0)])
        .assert()
        .success();

    // every invocation is a fresh process: the open session must come back
    // from the state file, not from history grouping
    rtc()
        .args(["--state", &state, "--test", "status", "--at", &local_rfc3339(2026, 3, 2, 11, 0)])
        .assert()
        .success()
        .stdout(contains("Working"))
        .stdout(contains("02:00:00"));

    rtc()
        .args(["--state", &state, "--test", "history"])
        .assert()
        .success()
        .stdout(contains("No history records yet"));
}

#[test]
fn test_invalid_at_timestamp() {
    let state = setup_state("bad_at");
    add_employee(&state, "Ana", "full");

    rtc()
        .args(["--state", &state, "--test", "in", "--at", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"));
}

#[test]
fn test_break_commands_follow_the_state_machine() {
    let state = setup_state("break_machine");
    add_employee(&state, "Ana", "full");

    rtc()
        .args(["--state", &state, "--test", "in", "--at", &local_rfc3339(2026, 3, 2, 9, 0)])
        .assert()
        .success();

    rtc()
        .args(["--state", &state, "--test", "break", "end", "--at", &local_rfc3339(2026, 3, 2, 10, 0)])
        .assert()
        .failure()
        .stderr(contains("Not on break"));

    rtc()
        .args(["--state", &state, "--test", "break", "start", "--at", &local_rfc3339(2026, 3, 2, 10, 0)])
        .assert()
        .success();

    rtc()
        .args(["--state", &state, "--test", "break", "start", "--at", &local_rfc3339(2026, 3, 2, 10, 5)])
        .assert()
        .failure()
        .stderr(contains("Already on break"));
}

#[test]
fn test_status_is_idle_without_session() {
    let state = setup_state("idle_status");
    rtc()
        .args(["--state", &state, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("Idle"))
        .stdout(contains("Working").not());
}
