// tests/cli_output.rs

use std::error::Error;
use std::fs;
use std::process::Command;

use serde_yaml::Value;
use tempfile::tempdir;

type TestResult = Result<(), Box<dyn Error>>;

/// `check` prints the report on stdout and nothing else: engine logs go
/// to stderr, so `driftrun check > out.yaml` stays parseable YAML.
#[test]
fn check_stdout_is_clean_yaml_and_logs_go_to_stderr() -> TestResult {
    let dir = tempdir()?;
    let storage = dir.path().join("state");
    let config = dir.path().join("cfg.yaml");
    fs::write(&config, "a: 1\nb: 2\n")?;

    let output = Command::new(env!("CARGO_BIN_EXE_driftrun"))
        .arg("check")
        .arg("--storage-dir")
        .arg(&storage)
        .arg("--file")
        .arg(&config)
        .env("DRIFTRUN_LOG", "info")
        .output()?;

    assert!(output.status.success(), "check exited with {:?}", output.status);

    let stdout = String::from_utf8(output.stdout)?;
    // No log lines (or their ANSI escapes) interleaved with the report.
    assert!(!stdout.contains('\u{1b}'), "stdout carries ANSI escapes: {stdout:?}");

    let report: Value = serde_yaml::from_str(&stdout)?;
    assert_eq!(report["status"], Value::from("changed"));
    assert_eq!(report["message"], Value::from("YAML updated"));
    assert_eq!(report["diff"]["a"]["status"], Value::from("added"));

    // The commit log line lands on stderr instead.
    let stderr = String::from_utf8(output.stderr)?;
    assert!(
        stderr.contains("committed snapshot state"),
        "expected engine logs on stderr, got: {stderr:?}"
    );
    Ok(())
}
