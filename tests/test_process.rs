//! Behavior that can only be observed from outside the process: the exit
//! status of `fatal` and output sent to the real stdout and stderr.
//!
//! Each parent test re-runs this test binary filtered to a single child
//! test, with an environment variable telling the child what to do.

use leveled_logger::{LevelLogger, Logger, Severity};
use leveled_logger::{log_error, log_fatal, log_info};
use regex::Regex;
use std::path::PathBuf;
use std::process::{Command, Output};

const CHILD_ENV: &str = "LEVELED_LOGGER_CHILD";

fn run_child(test_name: &str, arg: &str) -> Output {
    Command::new(std::env::current_exe().unwrap())
        .args(["--exact", test_name, "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, arg)
        .output()
        .expect("Failed to spawn child test process")
}

fn test_path(test_name: &str) -> PathBuf {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!(
        "{}_{}_{}.log",
        test_name,
        timestamp,
        rand::random::<u16>()
    ))
}

#[test]
fn child_fatal() {
    let Ok(path) = std::env::var(CHILD_ENV) else {
        return;
    };
    // Error minimum: fatal must ignore the gate
    let logger = LevelLogger::new(Severity::Error, "child", &path).unwrap();
    log_error!(logger, "before fatal");
    log_fatal!(logger, "boom: {}", 7);
}

#[test]
fn child_stdout() {
    if std::env::var(CHILD_ENV).is_err() {
        return;
    }
    let logger = LevelLogger::new(Severity::Info, "child", "").unwrap();
    log_info!(logger; "to", "stdout", 42);
}

#[test]
fn test_fatal_writes_stderr_and_exits_with_1() {
    let path = test_path("fatal_child");
    let output = run_child("child_fatal", path.to_str().unwrap());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("boom: 7\n"), "stderr was: {}", stderr);

    // The configured file gets regular lines but not the fatal message
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("child ERROR: "));
    assert!(contents.contains("before fatal"));
    assert!(!contents.contains("boom"));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_empty_path_writes_stdout() {
    let output = run_child("child_stdout", "1");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // libtest prints "test child_stdout ... " without a newline before the
    // child body runs, so the log line may share its stdout line.
    let line = stdout
        .lines()
        .find_map(|l| l.find("child INFO : ").map(|start| &l[start..]))
        .unwrap_or_else(|| panic!("no log line in stdout: {}", stdout));
    let shape =
        Regex::new(r"^child INFO : \d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} to stdout 42$").unwrap();
    assert!(shape.is_match(line), "unexpected log line: {:?}", line);
}
