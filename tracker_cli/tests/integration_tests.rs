//! Integration tests for the tracker binary.
//!
//! These tests verify end-to-end behavior including:
//! - Training and daily step reports
//! - Error reporting and the empty daily output on bad records
//! - JSON output
//! - Body parameters taken from a settings file

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create an isolated config directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary with no user settings in scope
fn cli(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tracker"));
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Step and training activity tracker"));
}

#[test]
fn test_training_report() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["training", "3456,Running,45m", "--weight", "75", "--height", "1.8"])
        .assert()
        .success()
        .stdout(
            "Тип тренировки: Running\n\
             Длительность: 0.75 ч.\n\
             Дистанция: 2.80 км.\n\
             Скорость: 3.73 км/ч\n\
             Сожгли калорий: 209.95\n",
        );
}

#[test]
fn test_training_unknown_activity_fails() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["training", "1000,Swimming,10m", "--weight", "75", "--height", "1.8"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("UnknownActivityType"));
}

#[test]
fn test_training_wrong_field_count_fails() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["training", "100,Running", "--weight", "75", "--height", "1.8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("WrongFieldCount"));
}

#[test]
fn test_training_json() {
    let temp_dir = setup_test_dir();
    let output = cli(&temp_dir)
        .args([
            "training",
            "3456,Walking,45m",
            "--weight",
            "75",
            "--height",
            "1.8",
            "--json",
        ])
        .output()
        .expect("Failed to run tracker");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(value["label"], "Walking");
    assert_eq!(value["kind"], "walking");
    let calories = value["calories"].as_f64().unwrap();
    assert!((calories - 104.976).abs() < 1e-6);
}

#[test]
fn test_day_report() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["day", "6000,1h", "--weight", "80", "--height", "1.8"])
        .assert()
        .success()
        .stdout("Количество шагов: 6000.\nДистанция составила 3.90 км.\nВы сожгли 156.00 ккал.\n");
}

#[test]
fn test_day_bad_record_prints_nothing() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["day", "6000,soon", "--weight", "80", "--height", "1.8"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Discarding daily step record"));
}

#[test]
fn test_day_json_reports_errors() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["day", "0,1h", "--weight", "80", "--height", "1.8", "--json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidStepCount"));
}

#[test]
fn test_body_parameters_from_config_file() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("settings.toml");
    fs::write(&config_path, "[body]\nweight_kg = 80.0\nheight_m = 1.8\n").unwrap();

    cli(&temp_dir)
        .args(["day", "6000,1h", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Вы сожгли 156.00 ккал."));
}

#[test]
fn test_default_config_location() {
    let temp_dir = setup_test_dir();
    let config_dir = temp_dir.path().join("tracker");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[body]\nweight_kg = 75.0\nheight_m = 1.8\n",
    )
    .unwrap();

    cli(&temp_dir)
        .args(["training", "3456,Running,45m"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Сожгли калорий: 209.95"));
}

#[test]
fn test_missing_body_parameters_fails() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["training", "3456,Running,45m", "--weight", "75"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("height not given"));
}
