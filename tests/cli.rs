use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::process::{Command, Output};

const INTERNAL_ERROR_MESSAGE: &str =
    "An internal error occurred while solving the water jug problem.";

fn run_jugpath<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_jugpath");
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("jugpath command should execute")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "command failed with status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn assert_failure(output: &Output) {
    if output.status.success() {
        panic!(
            "command unexpectedly succeeded\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn parse_json_stdout(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|err| {
        panic!(
            "stdout should be valid json ({err})\nstdout:\n{}",
            stdout_text(output)
        )
    })
}

fn error_lines(output: &Output) -> Vec<String> {
    stderr_text(output)
        .lines()
        .filter(|line| line.starts_with("error: "))
        .map(str::to_owned)
        .collect()
}

#[test]
fn solve_prints_step_table() {
    let output = run_jugpath(["solve", "4", "3", "2"]);
    assert_success(&output);

    let stdout = stdout_text(&output);
    let mut lines = stdout.lines();
    let header = lines.next().expect("table header");
    assert!(header.contains("jug X"));
    assert!(header.contains("jug Y"));
    assert_eq!(lines.count(), 4);
    assert!(stdout.contains("fill Y"));
}

#[test]
fn infeasible_query_exits_successfully_with_reason() {
    let output = run_jugpath(["solve", "6", "10", "100"]);
    assert_success(&output);
    assert!(stdout_text(&output).contains("greater than the maximum jug capacity 10"));
}

#[test]
fn invalid_query_reports_every_violation() {
    let output = run_jugpath(["solve", "0", "-3", "2"]);
    assert_failure(&output);
    assert!(stdout_text(&output).is_empty());

    let errors = error_lines(&output);
    assert_eq!(
        errors,
        vec![
            "error: X capacity must be a positive integer (got 0)".to_string(),
            "error: Y capacity must be a positive integer (got -3)".to_string(),
        ]
    );
    assert!(!stderr_text(&output).contains(INTERNAL_ERROR_MESSAGE));
}

#[test]
fn zero_state_limit_is_rejected_by_argument_parsing() {
    let output = run_jugpath(["solve", "4", "3", "2", "--max-states", "0"]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_text(&output).is_empty());

    let stderr = stderr_text(&output);
    assert!(stderr.contains("--max-states"));
    assert!(!stderr.contains(INTERNAL_ERROR_MESSAGE));
}

#[test]
fn missing_config_file_is_a_caller_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");

    let output = run_jugpath([
        OsStr::new("solve"),
        OsStr::new("4"),
        OsStr::new("3"),
        OsStr::new("2"),
        OsStr::new("--config"),
        missing.as_os_str(),
    ]);
    assert_failure(&output);
    assert!(stdout_text(&output).is_empty());

    let errors = error_lines(&output);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("absent.json"));
    assert!(!stderr_text(&output).contains(INTERNAL_ERROR_MESSAGE));
}

#[test]
fn zero_state_limit_in_config_file_is_a_caller_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solver.json");
    fs::write(&path, r#"{"max_states": 0}"#).unwrap();

    let output = run_jugpath([
        OsStr::new("solve"),
        OsStr::new("4"),
        OsStr::new("3"),
        OsStr::new("2"),
        OsStr::new("-c"),
        path.as_os_str(),
    ]);
    assert_failure(&output);

    let errors = error_lines(&output);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("State limit must be at least 1"));
    assert!(!stderr_text(&output).contains(INTERNAL_ERROR_MESSAGE));
}

#[test]
fn config_file_settings_are_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solver.json");
    fs::write(&path, r#"{"terminal_marker": "target_reached"}"#).unwrap();

    let output = run_jugpath([
        OsStr::new("solve"),
        OsStr::new("4"),
        OsStr::new("3"),
        OsStr::new("2"),
        OsStr::new("--config"),
        path.as_os_str(),
    ]);
    assert_success(&output);

    let stdout = stdout_text(&output);
    let last = stdout.lines().last().expect("final step");
    assert!(last.ends_with("[solved]"));
}

#[test]
fn exceeded_state_limit_hides_details_behind_generic_message() {
    let output = run_jugpath(["solve", "7", "11", "2", "--max-states", "3"]);
    assert_failure(&output);
    assert!(stdout_text(&output).is_empty());

    let stderr = stderr_text(&output);
    assert!(stderr.contains(INTERNAL_ERROR_MESSAGE));
    assert!(error_lines(&output).is_empty());
}

#[test]
fn json_report_goes_to_stdout_and_logs_to_stderr() {
    let output = run_jugpath(["solve", "4", "3", "2", "--json"]);
    assert_success(&output);

    let report = parse_json_stdout(&output);
    assert!(report["id"].is_string());
    assert!(report["solvedAt"].is_string());
    assert_eq!(report["outcome"]["feasible"], true);
    assert_eq!(report["outcome"]["steps"].as_array().map(Vec::len), Some(4));
    assert_eq!(report["stats"]["depth"], 4);

    let stderr = stderr_text(&output);
    assert!(stderr.contains("solving water jug problem"));
    assert!(stderr.contains("solution found"));
}

#[test]
fn mark_target_flags_final_step() {
    let output = run_jugpath(["solve", "4", "3", "2", "--json", "--mark-target"]);
    assert_success(&output);

    let report = parse_json_stdout(&output);
    let steps = report["outcome"]["steps"].as_array().expect("steps array");
    let (last, rest) = steps.split_last().expect("at least one step");
    assert_eq!(last["terminal"], true);
    assert!(rest.iter().all(|step| step.get("terminal").is_none()));
}

#[test]
fn check_reports_feasibility_without_solving() {
    let feasible = run_jugpath(["check", "4", "3", "2"]);
    assert_success(&feasible);
    assert_eq!(stdout_text(&feasible).trim(), "feasible");

    let infeasible = run_jugpath(["check", "2", "6", "5"]);
    assert_success(&infeasible);
    assert!(stdout_text(&infeasible).starts_with("infeasible: "));

    let stderr = stderr_text(&infeasible);
    assert!(stderr.contains("checking feasibility"));
    assert!(!stderr.contains("solving water jug problem"));
}

#[test]
fn health_prints_readiness_json() {
    let output = run_jugpath(["health"]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["service"], "jugpath");
}
