//! Round countdown.
//!
//! `Countdown` is the single owned timer resource of a game. It is driven by
//! elapsed time from the event loop and decrements the remaining time in
//! whole ticks. Starting it again replaces the previous run, so there is
//! never more than one ticker.

use std::time::Duration;

/// Lifecycle of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Never started
    Idle,
    /// Ticking down
    Running,
    /// Reached zero while running
    Expired,
    /// Cancelled before reaching zero
    Stopped,
}

/// What happened during a call to [`Countdown::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, nothing happened
    Idle,
    /// Still running with time left
    Ticking,
    /// Remaining time hit zero
    Expired,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    state: TimerState,
    tick: Duration,
    remaining_ms: u64,
    since_tick: Duration,
}

impl Countdown {
    pub fn new(tick: Duration) -> Self {
        Self {
            state: TimerState::Idle,
            tick: tick.max(Duration::from_millis(1)),
            remaining_ms: 0,
            since_tick: Duration::ZERO,
        }
    }

    /// Reset remaining time to `limit_ms` and start ticking.
    pub fn start(&mut self, limit_ms: u64) {
        self.remaining_ms = limit_ms;
        self.since_tick = Duration::ZERO;
        self.state = if limit_ms == 0 {
            TimerState::Expired
        } else {
            TimerState::Running
        };
    }

    /// Cancel the countdown. Safe to call in any state.
    pub fn stop(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Stopped;
            self.since_tick = Duration::ZERO;
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    /// Time until the next tick fires, or `None` if not running.
    pub fn until_next_tick(&self) -> Option<Duration> {
        self.is_running()
            .then(|| self.tick.saturating_sub(self.since_tick))
    }

    /// Feed elapsed wall time into the countdown.
    ///
    /// Each full tick interval removes one tick's worth of milliseconds,
    /// clamped at zero. Leftover time carries over to the next call.
    /// Time past expiry is discarded.
    pub fn advance(&mut self, elapsed: Duration) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }

        self.since_tick += elapsed;
        let tick_ms = self.tick.as_millis() as u64;

        while self.since_tick >= self.tick {
            self.since_tick -= self.tick;
            self.remaining_ms = self.remaining_ms.saturating_sub(tick_ms);
            if self.remaining_ms == 0 {
                self.state = TimerState::Expired;
                self.since_tick = Duration::ZERO;
                return TickOutcome::Expired;
            }
        }

        TickOutcome::Ticking
    }
}
