//! CLI validation paths that must fail before any network activity.

use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn briefly(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("briefly").expect("binary exists");
    cmd.current_dir(dir.path())
        .env_remove("HUGGINGFACE_TOKEN")
        .env_remove("BRIEFLY_API_URL")
        .env("BRIEFLY_LOG_DIR", dir.path().join("logs"));
    cmd
}

#[test]
fn help_runs() {
    let mut cmd = Command::cargo_bin("briefly").expect("binary exists");
    cmd.arg("--help").assert().success();
}

#[test]
fn missing_input_exits_one() {
    let dir = TempDir::new().unwrap();
    briefly(&dir)
        .env("HUGGINGFACE_TOKEN", "test-token")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("no input file"));
}

#[test]
fn invalid_summary_type_exits_one() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("article.txt"), "Some text.").unwrap();
    briefly(&dir)
        .env("HUGGINGFACE_TOKEN", "test-token")
        .args(["--type", "haiku", "article.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("invalid summary type"));
}

#[test]
fn missing_token_exits_one_with_guidance() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("article.txt"), "Some text.").unwrap();
    briefly(&dir)
        .arg("article.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("HUGGINGFACE_TOKEN"));
}

#[test]
fn unreadable_file_exits_one() {
    let dir = TempDir::new().unwrap();
    briefly(&dir)
        .env("HUGGINGFACE_TOKEN", "test-token")
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("failed to read"));
}

#[test]
fn empty_file_exits_one() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("blank.txt"), "  \n\t\n").unwrap();
    briefly(&dir)
        .env("HUGGINGFACE_TOKEN", "test-token")
        .arg("blank.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("is empty"));
}

#[test]
fn run_log_is_created_on_demand() {
    let dir = TempDir::new().unwrap();
    briefly(&dir)
        .env("HUGGINGFACE_TOKEN", "test-token")
        .arg("does-not-exist.txt")
        .assert()
        .failure();
    let log = fs::read_to_string(dir.path().join("logs/app.log")).expect("log file exists");
    assert!(log.contains("failed to read"));
}
