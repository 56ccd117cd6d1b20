//! Integration tests for the command line surface

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{colortap, config_file};

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    colortap(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn play_help_shows_flags() {
    let dir = TempDir::new().unwrap();
    colortap(&dir)
        .args(["play", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--seed"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--time-limit"));
}

#[test]
fn version_starts_with_package_version() {
    let dir = TempDir::new().unwrap();
    colortap(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "colortap {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn unknown_subcommand_exits_2() {
    let dir = TempDir::new().unwrap();
    colortap(&dir).arg("dance").assert().code(2);
}

// ============================================================================
// Play
// ============================================================================

#[test]
fn play_without_terminal_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    colortap(&dir)
        .args(["play", "--seed", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_path_honors_env_override() {
    let dir = TempDir::new().unwrap();
    let expected = config_file(&dir).display().to_string();
    colortap(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn config_show_prints_defaults_without_file() {
    let dir = TempDir::new().unwrap();
    colortap(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[rules]"))
        .stdout(predicate::str::contains("starting_lives = 3"))
        .stdout(predicate::str::contains("[display]"));
}

#[test]
fn config_show_reflects_file_values() {
    let dir = TempDir::new().unwrap();
    std::fs::write(config_file(&dir), "[rules]\nstarting_lives = 5\n").unwrap();
    colortap(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("starting_lives = 5"))
        .stdout(predicate::str::contains("initial_time_limit_ms = 3000"));
}

#[test]
fn config_output_uses_configured_theme() {
    let dir = TempDir::new().unwrap();
    std::fs::write(config_file(&dir), "[display]\ntheme = \"classic\"\n").unwrap();
    colortap(&dir)
        .env_remove("NO_COLOR")
        .args(["config", "show"])
        .assert()
        .success()
        // classic prints primary text in bright white, the default theme in gray
        .stdout(predicate::str::contains("\x1b[97m"))
        .stdout(predicate::str::contains("\x1b[37m").not());
}

#[test]
fn config_output_uses_default_theme_without_file() {
    let dir = TempDir::new().unwrap();
    colortap(&dir)
        .env_remove("NO_COLOR")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[37m"));
}

#[test]
fn config_show_reports_parse_errors() {
    let dir = TempDir::new().unwrap();
    std::fs::write(config_file(&dir), "[rules\nstarting_lives = ").unwrap();
    colortap(&dir)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.toml"));
}

#[test]
fn config_migrate_yes_writes_missing_fields() {
    let dir = TempDir::new().unwrap();
    let path = config_file(&dir);
    std::fs::write(&path, "# mine\n[rules]\nstarting_lives = 4\n").unwrap();

    colortap(&dir)
        .args(["config", "migrate", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("missing field"))
        .stdout(predicate::str::contains("Config updated successfully."));

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("# mine"));
    assert!(written.contains("starting_lives = 4"));
    assert!(written.contains("miss_delay_ms"));
    assert!(written.contains("[display]"));
}

#[test]
fn config_migrate_creates_missing_file() {
    let dir = TempDir::new().unwrap();
    colortap(&dir)
        .args(["config", "migrate", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("does not exist"));
    assert!(config_file(&dir).exists());
}

#[test]
fn config_migrate_without_tty_makes_no_changes() {
    let dir = TempDir::new().unwrap();
    colortap(&dir)
        .args(["config", "migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes made."));
    assert!(!config_file(&dir).exists());
}

#[test]
fn config_migrate_up_to_date_is_noop() {
    let dir = TempDir::new().unwrap();
    colortap(&dir).args(["config", "migrate", "-y"]).assert().success();
    colortap(&dir)
        .args(["config", "migrate", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));
}

// ============================================================================
// Completions and Logging
// ============================================================================

#[test]
fn completions_bash_mentions_binary() {
    let dir = TempDir::new().unwrap();
    colortap(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("colortap"));
}

#[test]
fn log_file_receives_events() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("colortap.log");
    colortap(&dir)
        .args(["config", "show", "--log-file"])
        .arg(&log)
        .env("COLORTAP_LOG", "debug")
        .assert()
        .success();

    let content = std::fs::read_to_string(&log).unwrap();
    assert!(content.contains("logging started"));
    assert!(content.contains("no config file"));
}
