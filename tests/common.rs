#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtc() -> Command {
    cargo_bin_cmd!("rtimeclock")
}

/// Create a unique test state-file path inside the system temp dir and remove
/// any leftover from a previous run
pub fn setup_state(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeclock.json", name));
    let state_path = path.to_string_lossy().to_string();
    fs::remove_file(&state_path).ok();
    state_path
}

/// Register an employee via the CLI (which also selects it) and return the
/// generated id parsed from the success message.
pub fn add_employee(state: &str, name: &str, schedule: &str) -> String {
    let out = rtc()
        .args([
            "--state", state, "--test", "employee", "add", name, "--schedule", schedule,
        ])
        .output()
        .expect("run employee add");
    assert!(out.status.success(), "employee add failed");

    let stdout = String::from_utf8_lossy(&out.stdout).to_string();
    let start = stdout.find("(id: ").expect("id marker in output") + 5;
    let end = stdout[start..].find(')').expect("closing paren") + start;
    stdout[start..end].to_string()
}

/// RFC3339 timestamp in the local timezone, so date keys and clock rendering
/// stay stable regardless of where the tests run.
pub fn local_rfc3339(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> String {
    use chrono::TimeZone;
    chrono::Local
        .with_ymd_and_hms(y, mo, d, h, mi, 0)
        .unwrap()
        .to_rfc3339()
}
