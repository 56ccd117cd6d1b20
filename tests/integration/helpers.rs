//! Shared helpers for integration tests

use std::path::PathBuf;
use std::time::Duration;

use assert_cmd::Command;
use tempfile::TempDir;

use colortap::config::CONFIG_ENV;
use colortap::game::GameController;

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// A `colortap` command with colors off and the config redirected into `dir`.
pub fn colortap(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("colortap").expect("colortap binary should be built");
    cmd.env("NO_COLOR", "1").env(CONFIG_ENV, config_file(dir));
    cmd
}

pub fn config_file(dir: &TempDir) -> PathBuf {
    dir.path().join("config.toml")
}

/// Index of a cell holding the target color.
pub fn target_index(c: &GameController) -> usize {
    let round = c.round();
    round
        .grid
        .iter()
        .position(|&s| s == round.target)
        .expect("every grid contains its target")
}

/// Index of a cell holding some other color.
pub fn wrong_index(c: &GameController) -> usize {
    let round = c.round();
    round
        .grid
        .iter()
        .position(|&s| s != round.target)
        .expect("default rules keep filler cells distinct from the target")
}

/// Advance past the start delay and any miss recovery until taps are live.
pub fn wait_for_play(c: &mut GameController) {
    for _ in 0..20 {
        if c.phase() == colortap::game::Phase::Playing {
            return;
        }
        c.advance(ms(100));
    }
    panic!("controller never reached Playing, phase {:?}", c.phase());
}
