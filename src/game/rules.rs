//! Tunable game rules.
//!
//! Loaded from the `[rules]` section of the config file. Every field has a
//! default so partial configs work.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound on `starting_lives`.
pub const MAX_LIVES: u32 = 99;

/// Difficulty and pacing parameters for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Lives at the start of a session
    pub starting_lives: u32,
    /// Time limit of the first round, in milliseconds
    pub initial_time_limit_ms: u64,
    /// The time limit never drops below this, in milliseconds
    pub min_time_limit_ms: u64,
    /// Multiplier applied to the time limit on each speed-up
    pub speedup_factor: f64,
    /// Speed up after every N correct answers
    pub speedup_every: u32,
    /// Countdown tick interval, in milliseconds
    pub tick_ms: u64,
    /// Pause after a miss before the next round, in milliseconds
    pub miss_delay_ms: u64,
    /// Pause after a restart before the countdown starts, in milliseconds
    pub restart_delay_ms: u64,
    /// Whether filler cells may repeat the target color
    pub allow_duplicate_target: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            initial_time_limit_ms: 3000,
            min_time_limit_ms: 700,
            speedup_factor: 0.93,
            speedup_every: 3,
            tick_ms: 100,
            miss_delay_ms: 700,
            restart_delay_ms: 300,
            allow_duplicate_target: false,
        }
    }
}

impl Rules {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    pub fn miss_delay(&self) -> Duration {
        Duration::from_millis(self.miss_delay_ms)
    }

    pub fn restart_delay(&self) -> Duration {
        Duration::from_millis(self.restart_delay_ms)
    }

    /// Clamp values that would break the game loop into a sane range.
    pub fn sanitized(mut self) -> Self {
        self.starting_lives = self.starting_lives.clamp(1, MAX_LIVES);
        self.min_time_limit_ms = self.min_time_limit_ms.max(1);
        self.initial_time_limit_ms = self.initial_time_limit_ms.max(self.min_time_limit_ms);
        if !(self.speedup_factor > 0.0 && self.speedup_factor <= 1.0) {
            self.speedup_factor = Rules::default().speedup_factor;
        }
        self.speedup_every = self.speedup_every.max(1);
        self.tick_ms = self.tick_ms.max(1);
        self
    }
}
