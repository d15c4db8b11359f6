//! Integration tests for the CLI interface

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("fanout.toml");
    std::fs::write(&path, content).unwrap();
    path
}

const MIXED: &str = r#"
name = "ci"

[[commands]]
name = "pass"
program = "sh"
args = ["-c", "exit 0"]

[[commands]]
name = "fail"
program = "sh"
args = ["-c", "echo boom >&2; exit 1"]
"#;

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("fanout").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn test_invalid_command() {
    let mut cmd = Command::cargo_bin("fanout").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_missing_config_fails() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("fanout").unwrap();
    cmd.current_dir(dir.path())
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load fanout.toml"));
}

#[cfg(unix)]
#[test]
fn test_run_all_passing() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        r#"
name = "ci"

[report]
help_message = "Done."

[[commands]]
name = "one"
program = "true"

[[commands]]
name = "two"
program = "sh"
args = ["-c", "exit 0"]
"#,
    );

    let mut cmd = Command::cargo_bin("fanout").unwrap();
    cmd.current_dir(dir.path())
        .arg("run")
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary of commands results"))
        .stdout(predicate::str::contains(format!(
            "✅ fanout run -c {} one",
            config.display()
        )))
        .stdout(predicate::str::contains(format!(
            "✅ fanout run -c {} two",
            config.display()
        )))
        .stdout(predicate::str::contains("Done."))
        .stdout(predicate::str::contains("--list-errors").not());
}

#[cfg(unix)]
#[test]
fn test_run_with_failure_prints_hint() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, MIXED);

    let mut cmd = Command::cargo_bin("fanout").unwrap();
    cmd.current_dir(dir.path())
        .arg("run")
        .assert()
        .failure()
        .stdout(predicate::str::contains("✅ fanout run pass"))
        .stdout(predicate::str::contains("❌ fanout run fail"))
        .stdout(predicate::str::contains("Run `fanout run --list-errors`"))
        .stdout(predicate::str::contains("boom").not());
}

/// Command line inside the `Run `...`` hint, split into words
#[cfg(unix)]
fn hint_command(stdout: &str) -> Vec<String> {
    let line = stdout
        .lines()
        .find(|line| line.contains("--list-errors` to see"))
        .expect("no hint line in output");
    let start = line.find('`').unwrap() + 1;
    let end = start + line[start..].find('`').unwrap();
    line[start..end].split_whitespace().map(str::to_string).collect()
}

#[cfg(unix)]
#[test]
fn test_hint_reruns_with_details() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("checks.toml"), MIXED).unwrap();

    let mut cmd = Command::cargo_bin("fanout").unwrap();
    let output = cmd
        .current_dir(dir.path())
        .args(["run", "-c", "checks.toml"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let hint = hint_command(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(
        hint,
        vec!["fanout", "run", "-c", "checks.toml", "--list-errors"]
    );

    let mut rerun = Command::cargo_bin("fanout").unwrap();
    rerun
        .current_dir(dir.path())
        .args(&hint[1..])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Detailed Errors for failed commands"))
        .stdout(predicate::str::contains("❌ fanout run -c checks.toml fail"))
        .stdout(predicate::str::contains("Error: boom"));
}

#[cfg(unix)]
#[test]
fn test_report_lines_are_plain() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, MIXED);

    let mut cmd = Command::cargo_bin("fanout").unwrap();
    cmd.current_dir(dir.path())
        .arg("run")
        .assert()
        .failure()
        .stdout(predicate::function(|out: &str| {
            out.lines()
                .any(|line| line.trim() == "Summary of commands results")
                && out
                    .lines()
                    .any(|line| line.trim_start().starts_with("Run `fanout run --list-errors`"))
        }))
        .stdout(predicate::str::contains("INFO").not())
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[cfg(unix)]
#[test]
fn test_run_with_list_errors_prints_details() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, MIXED);

    let mut cmd = Command::cargo_bin("fanout").unwrap();
    cmd.current_dir(dir.path())
        .args(["run", "--list-errors"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Detailed Errors for failed commands"))
        .stdout(predicate::str::contains("Error: boom"));
}

#[cfg(unix)]
#[test]
fn test_run_only_selected() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, MIXED);

    let mut cmd = Command::cargo_bin("fanout").unwrap();
    cmd.current_dir(dir.path())
        .args(["run", "--only", "pass"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ fanout run pass"))
        .stdout(predicate::str::contains("fanout run fail").not());
}

#[test]
fn test_run_missing_program_aborts() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        r#"
[[commands]]
name = "ghost"
program = "fanout-definitely-not-a-real-program"
"#,
    );

    let mut cmd = Command::cargo_bin("fanout").unwrap();
    cmd.current_dir(dir.path())
        .arg("run")
        .arg("-c")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Command not found"))
        .stdout(predicate::str::contains("Summary of commands results").not());
}

#[test]
fn test_list_commands() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, MIXED);

    let mut cmd = Command::cargo_bin("fanout").unwrap();
    cmd.arg("list")
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands in ci:"))
        .stdout(predicate::str::contains("pass - sh -c exit 0"));
}
