//! Smoke tests to verify command wiring

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the user's config and .env files
fn rosterctl(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rosterctl").unwrap();
    cmd.current_dir(dir)
        .env("ROSTERCTL_CONFIG", dir.join("config.toml"))
        .env_remove("ROSTERCTL_ENDPOINT")
        .env_remove("RUST_LOG")
        .arg("--quiet");
    cmd
}

/// Fixture in the endpoint's shape: string ids
fn write_members(dir: &Path, n: usize) -> std::path::PathBuf {
    let members: Vec<serde_json::Value> = (1..=n)
        .map(|i| {
            serde_json::json!({
                "id": i.to_string(),
                "name": format!("User {i}"),
                "email": format!("user{i}@example.com"),
                "role": if i % 5 == 0 { "admin" } else { "member" },
            })
        })
        .collect();
    let path = dir.join("members.json");
    std::fs::write(&path, serde_json::to_vec(&members).unwrap()).unwrap();
    path
}

// === Help ===

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    rosterctl(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_list_help() {
    let dir = TempDir::new().unwrap();
    rosterctl(dir.path())
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter by name"));
}

// === List ===

#[test]
fn test_list_first_page_from_file() {
    let dir = TempDir::new().unwrap();
    let file = write_members(dir.path(), 25);

    rosterctl(dir.path())
        .arg("--file")
        .arg(&file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of 3"))
        .stdout(predicate::str::contains("User 10"))
        .stdout(predicate::str::contains("User 11").not());
}

#[test]
fn test_list_last_page() {
    let dir = TempDir::new().unwrap();
    let file = write_members(dir.path(), 25);

    rosterctl(dir.path())
        .arg("--file")
        .arg(&file)
        .args(["list", "--page", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rows 21-25 of 25"));
}

#[test]
fn test_list_json_with_query() {
    let dir = TempDir::new().unwrap();
    let file = write_members(dir.path(), 25);

    let output = rosterctl(dir.path())
        .arg("--file")
        .arg(&file)
        .args(["list", "--query", "ADMIN", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_items"], 5);
    assert_eq!(value["query"], "ADMIN");
    assert_eq!(value["members"][0]["id"], 5);
    assert_eq!(value["members"][0]["role"], "admin");
}

#[test]
fn test_list_missing_file_shows_empty_table() {
    let dir = TempDir::new().unwrap();

    rosterctl(dir.path())
        .arg("--file")
        .arg(dir.path().join("absent.json"))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No members on page 1"));
}

#[test]
fn test_list_rejects_page_zero() {
    let dir = TempDir::new().unwrap();
    rosterctl(dir.path())
        .args(["list", "--page", "0"])
        .assert()
        .failure();
}

#[test]
fn test_file_conflicts_with_endpoint() {
    let dir = TempDir::new().unwrap();
    rosterctl(dir.path())
        .args(["--file", "a.json", "--endpoint", "http://localhost/x", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_unwritable_log_file_falls_back_to_stderr() {
    let dir = TempDir::new().unwrap();
    // A regular file cannot be a log directory
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    rosterctl(dir.path())
        .arg("--log-file")
        .arg(blocker.join("rosterctl.log"))
        .arg("--file")
        .arg(dir.path().join("absent.json"))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No members on page 1"))
        .stderr(predicate::str::contains("Logging to stderr instead"))
        .stderr(predicate::str::contains("Error fetching members"));
}

#[test]
fn test_list_rejects_non_http_endpoint_flag() {
    let dir = TempDir::new().unwrap();
    rosterctl(dir.path())
        .args(["--endpoint", "members.json", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("http(s) URL"));
}

#[test]
fn test_list_rejects_non_http_endpoint_env() {
    let dir = TempDir::new().unwrap();
    rosterctl(dir.path())
        .env("ROSTERCTL_ENDPOINT", "ftp://example.com/members.json")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("http(s) URL"));
}

// === Config ===

#[test]
fn test_config_path_honors_env() {
    let dir = TempDir::new().unwrap();
    rosterctl(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_then_show() {
    let dir = TempDir::new().unwrap();
    rosterctl(dir.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(dir.path().join("config.toml").exists());

    rosterctl(dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    rosterctl(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("members.json"));
}

// === Completions ===

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    rosterctl(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rosterctl"));
}
