//! End-to-end tests for the non-interactive commands.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pomofog(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pomofog").unwrap();
    cmd.env("HOME", home.path()).env_remove("POMOFOG_CONFIG");
    cmd
}

#[test]
fn config_path_points_into_home() {
    let home = TempDir::new().unwrap();
    pomofog(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".pomofog").and(predicate::str::contains("config.yaml")));
}

#[test]
fn config_show_reports_defaults_without_a_file() {
    let home = TempDir::new().unwrap();
    pomofog(&home)
        .args(["config", "show", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"exists\": false"))
        .stdout(predicate::str::contains("\"focus_minutes\": 25"))
        .stdout(predicate::str::contains("\"long_break_minutes\": 35"));
}

#[test]
fn config_init_writes_file_once() {
    let home = TempDir::new().unwrap();
    pomofog(&home).args(["config", "init"]).assert().success();
    assert!(home.path().join(".pomofog/config.yaml").exists());

    pomofog(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    pomofog(&home).args(["config", "init", "--force"]).assert().success();
}

#[test]
fn config_show_reads_custom_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.yaml");
    std::fs::write(&path, "timer:\n  focus_minutes: 45\n").unwrap();

    pomofog(&home)
        .args(["config", "show", "-o", "json", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"focus_minutes\": 45"))
        .stdout(predicate::str::contains("\"short_break_minutes\": 5"));
}

#[test]
fn invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("broken.yaml");
    std::fs::write(&path, "timer: [1, 2").unwrap();

    pomofog(&home)
        .args(["config", "show"])
        .env("POMOFOG_CONFIG", &path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    pomofog(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomofog"));
}

#[test]
fn completions_do_not_need_a_home_directory() {
    Command::cargo_bin("pomofog")
        .unwrap()
        .env_remove("HOME")
        .env_remove("POMOFOG_CONFIG")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomofog"));
}

#[test]
fn config_without_home_is_an_error() {
    Command::cargo_bin("pomofog")
        .unwrap()
        .env_remove("HOME")
        .env_remove("POMOFOG_CONFIG")
        .args(["config", "path"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not determine home directory"));
}
