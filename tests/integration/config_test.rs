//! Config loading, saving and migration through the library API

use tempfile::TempDir;

use colortap::config::migrate_config;
use colortap::{Config, GameController};

use crate::helpers::config_file;

#[test]
fn saved_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = config_file(&dir);

    let mut config = Config::default();
    config.rules.starting_lives = 7;
    config.display.theme = "ocean".to_string();
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn partial_file_takes_defaults_for_the_rest() {
    let dir = TempDir::new().unwrap();
    let path = config_file(&dir);
    std::fs::write(&path, "[display]\nfps = 60\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.display.fps, 60);
    assert_eq!(config.rules, Config::default().rules);
}

#[test]
fn loaded_rules_drive_the_controller() {
    let dir = TempDir::new().unwrap();
    let path = config_file(&dir);
    std::fs::write(&path, "[rules]\nstarting_lives = 1\ninitial_time_limit_ms = 1500\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    let c = GameController::with_seed(config.rules, 4);
    assert_eq!(c.session().lives, 1);
    assert_eq!(c.round().time_limit_ms, 1500);
}

#[test]
fn migrated_file_parses_and_keeps_user_values() {
    let original = "# tuned for practice\n[rules]\nstarting_lives = 9\n";
    let result = migrate_config(original).unwrap();
    assert!(result.has_changes());
    assert!(result.content.starts_with("# tuned for practice"));

    let dir = TempDir::new().unwrap();
    let path = config_file(&dir);
    std::fs::write(&path, &result.content).unwrap();
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.rules.starting_lives, 9);
    assert_eq!(config.display, Config::default().display);

    assert!(!migrate_config(&result.content).unwrap().has_changes());
}
