use std::process::{Command, Output};

/// Set on the child process to select which scenario `child_entry` runs.
pub const CHILD_CASE_ENV: &str = "GCP_LOG_CHILD_CASE";

pub fn child_case() -> Option<String> {
    std::env::var(CHILD_CASE_ENV).ok()
}

/// Re-runs this test binary, executing only `child_entry` with `case` selected.
pub fn run_child(case: &str) -> Output {
    let exe = std::env::current_exe().expect("test binary path");
    Command::new(exe)
        .args(["child_entry", "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_CASE_ENV, case)
        .output()
        .expect("failed to spawn child test process")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
