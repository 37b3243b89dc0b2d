//! End-to-end tests for the `studypoints` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn studypoints(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("studypoints").unwrap();
    cmd.env("STUDYPOINTS_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn format_groups_thousands_with_default_suffix() {
    let dir = TempDir::new().unwrap();
    studypoints(&dir)
        .args(["format", "1234567"])
        .assert()
        .success()
        .stdout("1,234,567원\n");
}

#[test]
fn format_zero_prints_placeholder() {
    let dir = TempDir::new().unwrap();
    studypoints(&dir)
        .args(["format", "0"])
        .assert()
        .success()
        .stdout("Enter points to exchange\n");
}

#[test]
fn config_changes_are_used_by_format() {
    let dir = TempDir::new().unwrap();
    studypoints(&dir)
        .args(["config", "set", "separator", "period"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Separator set to: period"));
    studypoints(&dir)
        .args(["config", "set", "unit-suffix", "P"])
        .assert()
        .success();

    studypoints(&dir)
        .args(["format", "45000"])
        .assert()
        .success()
        .stdout("45.000P\n");

    studypoints(&dir)
        .args(["config", "remove", "separator"])
        .assert()
        .success();
    studypoints(&dir)
        .args(["config", "get", "separator"])
        .assert()
        .success()
        .stdout("Separator: comma\n");
}

#[test]
fn invalid_config_value_fails() {
    let dir = TempDir::new().unwrap();
    studypoints(&dir)
        .args(["config", "set", "separator", "tilde"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid separator 'tilde'"));
}

#[test]
fn replay_caps_digits_silently() {
    let dir = TempDir::new().unwrap();
    studypoints(&dir)
        .args(["replay", "1", "2", "3", "4", "5", "6", "7", "8", "9", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("digits: 123456789\n"))
        .stdout(predicate::str::contains("stage: input"));
}

#[test]
fn replay_replaces_leading_zero() {
    let dir = TempDir::new().unwrap();
    studypoints(&dir)
        .args(["replay", "0", "00", "5", "back", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("digits: 7\n"))
        .stdout(predicate::str::contains("label: 7원"));
}

#[test]
fn replay_confirm_reports_outcome() {
    let dir = TempDir::new().unwrap();
    studypoints(&dir)
        .args(["replay", "3", "00", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("outcome: confirmed 300원"));
}

#[test]
fn replay_rejects_unknown_keys() {
    let dir = TempDir::new().unwrap();
    studypoints(&dir)
        .args(["replay", "1", "enter"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown keypad key 'enter'"));
}

#[test]
fn replay_confirm_conflicts_with_cancel() {
    let dir = TempDir::new().unwrap();
    studypoints(&dir)
        .args(["replay", "1", "--confirm", "--cancel"])
        .assert()
        .failure();
}

#[test]
fn replay_accepts_only_back_for_backspace() {
    let dir = TempDir::new().unwrap();
    studypoints(&dir)
        .args(["replay", "1", "bs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown keypad key 'bs'"));
}

#[test]
fn digit_unit_suffix_is_rejected() {
    let dir = TempDir::new().unwrap();
    studypoints(&dir)
        .args(["config", "set", "unit-suffix", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid unit suffix '0'"));
}

#[test]
fn ambiguous_suffix_in_config_file_fails_to_load() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "unit_suffix = \",\"\n").unwrap();
    studypoints(&dir)
        .args(["format", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid unit suffix ','"));
}
