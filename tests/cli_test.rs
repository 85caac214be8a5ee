use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const STATE_FILE: &str = ".mdlite-config.json";

fn mdlite(cwd: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("mdlite");
    cmd.current_dir(cwd)
        .env_remove("MDLITE_CONFIG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_version() {
    let temp_dir = TempDir::new().unwrap();

    mdlite(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mdlite"));
}

#[test]
fn test_help_lists_options() {
    let temp_dir = TempDir::new().unwrap();

    mdlite(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dir"))
        .stdout(predicate::str::contains("--change"));
}

#[test]
fn test_without_terminal_fails_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("readme.md"), "# Hello").unwrap();

    mdlite(temp_dir.path())
        .arg("readme")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"))
        .stdout(predicate::str::contains("Hello").not());

    // nothing is remembered when no folder was chosen
    assert!(!temp_dir.path().join(STATE_FILE).exists());
}

#[test]
fn test_stale_remembered_folder_suggests_change() {
    let temp_dir = TempDir::new().unwrap();
    let gone = temp_dir.path().join("gone");
    fs::write(
        temp_dir.path().join(STATE_FILE),
        format!(r#"{{"lastDir": {:?}}}"#, gone.display().to_string()),
    )
    .unwrap();

    mdlite(temp_dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--change"));
}

#[test]
fn test_state_path_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let state_path = temp_dir.path().join("custom-state.json");
    let gone = temp_dir.path().join("gone");
    fs::write(
        &state_path,
        format!(r#"{{"lastDir": {:?}}}"#, gone.display().to_string()),
    )
    .unwrap();

    mdlite(temp_dir.path())
        .env("MDLITE_CONFIG", &state_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("gone"));
}

#[test]
fn test_malformed_state_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(STATE_FILE), "{ broken").unwrap();

    // Falls through to the folder prompt, which needs a terminal
    mdlite(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Prompt error"));
}
