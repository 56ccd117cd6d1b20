//! Session state and its transitions.
//!
//! `Session` is a small value; every transition returns a new one instead of
//! mutating in place.

use serde::Serialize;

use super::round::advance_difficulty;
use super::rules::Rules;

/// Cumulative state spanning rounds until game over or restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Session {
    pub score: u32,
    pub lives: u32,
    pub time_limit_ms: u64,
    pub game_over: bool,
}

impl Session {
    /// Fresh session at the starting lives and time limit.
    pub fn new(rules: &Rules) -> Self {
        Self {
            score: 0,
            lives: rules.starting_lives,
            time_limit_ms: rules.initial_time_limit_ms,
            game_over: false,
        }
    }

    /// Score one point and apply difficulty scaling.
    pub fn on_correct(self, rules: &Rules) -> Self {
        if self.game_over {
            return self;
        }
        let score = self.score.saturating_add(1);
        Self {
            score,
            time_limit_ms: advance_difficulty(self.time_limit_ms, score, rules),
            ..self
        }
    }

    /// Lose one life; the session ends when none are left.
    pub fn on_miss(self) -> Self {
        if self.game_over {
            return self;
        }
        let lives = self.lives.saturating_sub(1);
        Self {
            lives,
            game_over: lives == 0,
            ..self
        }
    }

    /// Back to a fresh session.
    pub fn restart(self, rules: &Rules) -> Self {
        Self::new(rules)
    }

    /// True if the last correct answer shortened the time limit.
    pub fn sped_up_from(&self, previous: &Session) -> bool {
        self.time_limit_ms < previous.time_limit_ms
    }
}
