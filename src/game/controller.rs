//! Session controller.
//!
//! `GameController` owns the current `Session`, the current `Round`, the
//! round `Countdown`, and any deferred "start next thing" actions. It runs
//! on a virtual clock advanced by the event loop, so the whole game is
//! deterministic under a seeded RNG and easy to drive from tests.
//!
//! Every round-replacing transition bumps a generation counter. Deferred
//! actions remember the generation they were scheduled under and are
//! dropped if it has changed by the time they fall due, so a restart during
//! miss recovery can never start a stale round.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::error::GameError;
use super::palette::Swatch;
use super::round::{Outcome, Round};
use super::rules::Rules;
use super::session::Session;
use super::timer::{Countdown, TickOutcome};

/// Where the controller is in its round cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Round is shown, countdown not started yet (after start/restart)
    Starting,
    /// Countdown running, taps are live
    Playing,
    /// After a miss, waiting to show the next round
    Recovering,
    /// No lives left, waiting for a restart
    GameOver,
}

/// Why a life was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    WrongColor(Swatch),
    Timeout,
}

/// Notable things that happened during an input or time step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted { target: Swatch, time_limit_ms: u64 },
    TimerStarted { time_limit_ms: u64 },
    Hit { score: u32 },
    SpeedUp { time_limit_ms: u64 },
    Miss { reason: MissReason, lives: u32 },
    GameOver { score: u32 },
    Restarted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeferredAction {
    /// Show a new round at the unchanged time limit (miss recovery)
    NextRound,
    /// Start the countdown for the round already on screen (restart)
    StartTimer,
}

#[derive(Debug, Clone, Copy)]
struct Deferred {
    due: Duration,
    generation: u64,
    action: DeferredAction,
}

/// Totals across all sessions played with this controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GameStats {
    pub rounds: u32,
    pub hits: u32,
    pub misses: u32,
    pub timeouts: u32,
    pub best_score: u32,
    pub games_played: u32,
}

/// Drives one player's game.
pub struct GameController<R: Rng = StdRng> {
    rules: Rules,
    session: Session,
    round: Round,
    timer: Countdown,
    rng: R,
    pending: Vec<Deferred>,
    generation: u64,
    clock: Duration,
    phase: Phase,
    stats: GameStats,
}

impl GameController<StdRng> {
    /// Controller with a deterministic grid sequence.
    pub fn with_seed(rules: Rules, seed: u64) -> Self {
        Self::new(rules, StdRng::seed_from_u64(seed))
    }

    /// Controller seeded from the OS.
    pub fn from_entropy(rules: Rules) -> Self {
        Self::new(rules, StdRng::from_entropy())
    }
}

impl<R: Rng> GameController<R> {
    /// Create a controller and begin the first round.
    ///
    /// The first round is visible immediately; its countdown starts after
    /// the restart delay, the same as after an explicit restart.
    pub fn new(rules: Rules, mut rng: R) -> Self {
        let rules = rules.sanitized();
        let session = Session::new(&rules);
        let round = Round::generate(session.time_limit_ms, &rules, &mut rng);
        let timer = Countdown::new(rules.tick());

        let mut controller = Self {
            rules,
            session,
            round,
            timer,
            rng,
            pending: Vec::new(),
            generation: 0,
            clock: Duration::ZERO,
            phase: Phase::Starting,
            stats: GameStats {
                rounds: 1,
                games_played: 1,
                ..GameStats::default()
            },
        };
        controller.schedule(controller.rules.restart_delay(), DeferredAction::StartTimer);
        tracing::info!(
            target_color = %controller.round.target,
            time_limit_ms = controller.session.time_limit_ms,
            "game started"
        );
        controller
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Virtual time since the controller was created.
    pub fn clock(&self) -> Duration {
        self.clock
    }

    pub fn is_game_over(&self) -> bool {
        self.session.game_over
    }

    /// Whether taps on the grid are currently accepted.
    pub fn accepts_taps(&self) -> bool {
        matches!(self.phase, Phase::Starting | Phase::Playing) && !self.session.game_over
    }

    /// Milliseconds left on the current round, for display.
    pub fn remaining_ms(&self) -> u64 {
        match self.phase {
            Phase::Starting => self.round.time_limit_ms,
            _ => self.timer.remaining_ms(),
        }
    }

    /// Handle a tap on grid cell `index` (row-major, 0..9).
    ///
    /// Taps are ignored after game over and while recovering from a miss.
    pub fn tap(&mut self, index: usize) -> Result<Vec<GameEvent>, GameError> {
        let tapped = self
            .round
            .cell(index)
            .ok_or(GameError::CellOutOfRange { index })?;
        Ok(self.tap_color(tapped))
    }

    /// Handle a pick of `tapped`, wherever it sits in the grid.
    pub fn tap_color(&mut self, tapped: Swatch) -> Vec<GameEvent> {
        if !self.accepts_taps() {
            tracing::debug!(%tapped, phase = ?self.phase, "tap ignored");
            return Vec::new();
        }

        let mut events = Vec::new();
        match self.round.resolve(tapped) {
            Outcome::Hit => self.on_correct(&mut events),
            Outcome::Miss => self.on_miss(MissReason::WrongColor(tapped), &mut events),
        }
        events
    }

    /// Reset the session and show a fresh round.
    ///
    /// The countdown for the new round starts after the restart delay.
    pub fn restart(&mut self) -> Vec<GameEvent> {
        self.bump_generation();
        self.timer.stop();
        self.session = self.session.restart(&self.rules);
        self.stats.games_played += 1;
        tracing::info!("game restarted");

        let mut events = vec![GameEvent::Restarted];
        self.show_new_round(&mut events);
        self.phase = Phase::Starting;
        self.schedule(self.rules.restart_delay(), DeferredAction::StartTimer);
        events
    }

    /// Advance the virtual clock by `elapsed`.
    ///
    /// Countdown ticks and deferred actions are processed in time order, so
    /// one large step behaves the same as many small ones.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let target = self.clock + elapsed;

        loop {
            let next_tick = self.timer.until_next_tick().map(|d| self.clock + d);
            let next_deferred = self.pending.iter().map(|d| d.due).min();
            let next = match (next_tick, next_deferred) {
                (Some(a), Some(b)) => a.min(b),
                (Some(a), None) => a,
                (None, Some(b)) => b,
                (None, None) => break,
            };
            if next > target {
                break;
            }

            let step = next.saturating_sub(self.clock);
            self.clock = next;
            if self.timer.advance(step) == TickOutcome::Expired {
                self.on_timeout(&mut events);
            }
            self.run_due(&mut events);
        }

        let rest = target.saturating_sub(self.clock);
        self.clock = target;
        if self.timer.advance(rest) == TickOutcome::Expired {
            self.on_timeout(&mut events);
        }

        events
    }

    fn on_correct(&mut self, events: &mut Vec<GameEvent>) {
        let previous = self.session;
        self.timer.stop();
        self.bump_generation();
        self.session = previous.on_correct(&self.rules);
        self.stats.hits += 1;
        self.stats.best_score = self.stats.best_score.max(self.session.score);
        tracing::debug!(score = self.session.score, "hit");
        events.push(GameEvent::Hit {
            score: self.session.score,
        });

        if self.session.sped_up_from(&previous) {
            tracing::info!(time_limit_ms = self.session.time_limit_ms, "speed up");
            events.push(GameEvent::SpeedUp {
                time_limit_ms: self.session.time_limit_ms,
            });
        }

        self.show_new_round(events);
        self.start_timer(events);
    }

    fn on_miss(&mut self, reason: MissReason, events: &mut Vec<GameEvent>) {
        self.timer.stop();
        self.bump_generation();
        self.session = self.session.on_miss();
        self.stats.misses += 1;
        if reason == MissReason::Timeout {
            self.stats.timeouts += 1;
        }
        tracing::debug!(?reason, lives = self.session.lives, "miss");
        events.push(GameEvent::Miss {
            reason,
            lives: self.session.lives,
        });

        if self.session.game_over {
            self.phase = Phase::GameOver;
            tracing::info!(score = self.session.score, "game over");
            events.push(GameEvent::GameOver {
                score: self.session.score,
            });
        } else {
            self.phase = Phase::Recovering;
            self.schedule(self.rules.miss_delay(), DeferredAction::NextRound);
        }
    }

    fn on_timeout(&mut self, events: &mut Vec<GameEvent>) {
        if self.phase == Phase::Playing && !self.session.game_over {
            self.on_miss(MissReason::Timeout, events);
        }
    }

    fn run_due(&mut self, events: &mut Vec<GameEvent>) {
        let now = self.clock;
        let (due, later): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|d| d.due <= now);
        self.pending = later;

        for deferred in due {
            if deferred.generation != self.generation {
                tracing::debug!(action = ?deferred.action, "dropping stale deferred action");
                continue;
            }
            match deferred.action {
                DeferredAction::NextRound if self.phase == Phase::Recovering => {
                    self.show_new_round(events);
                    self.start_timer(events);
                }
                DeferredAction::StartTimer if self.phase == Phase::Starting => {
                    self.start_timer(events);
                }
                _ => {}
            }
        }
    }

    fn show_new_round(&mut self, events: &mut Vec<GameEvent>) {
        self.round = Round::generate(self.session.time_limit_ms, &self.rules, &mut self.rng);
        self.stats.rounds += 1;
        events.push(GameEvent::RoundStarted {
            target: self.round.target,
            time_limit_ms: self.round.time_limit_ms,
        });
    }

    fn start_timer(&mut self, events: &mut Vec<GameEvent>) {
        // The previous run is always stopped first; the countdown is the
        // only ticker and `start` replaces whatever it was doing.
        self.timer.stop();
        self.timer.start(self.round.time_limit_ms);
        self.phase = Phase::Playing;
        events.push(GameEvent::TimerStarted {
            time_limit_ms: self.round.time_limit_ms,
        });
    }

    fn schedule(&mut self, delay: Duration, action: DeferredAction) {
        self.pending.push(Deferred {
            due: self.clock + delay,
            generation: self.generation,
            action,
        });
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}
