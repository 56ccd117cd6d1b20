//! Game core: palette, rounds, countdown, and the session controller.
//!
//! # Architecture
//!
//! - `palette`: the eight swatches and their names
//! - `rules`: tunable pacing and difficulty parameters
//! - `round`: target/label picking, grid generation, difficulty scaling
//! - `timer`: the owned round countdown
//! - `session`: immutable score/lives/time-limit transitions
//! - `controller`: ties the above together on a virtual clock
//!
//! # Usage
//!
//! ```
//! use colortap::game::{GameController, Rules};
//! use std::time::Duration;
//!
//! let mut game = GameController::with_seed(Rules::default(), 1);
//! game.advance(Duration::from_millis(300));
//! let round = game.round();
//! let hit = round.grid.iter().position(|&s| s == round.target).unwrap();
//! game.tap(hit).unwrap();
//! assert_eq!(game.session().score, 1);
//! ```

pub mod controller;
pub mod error;
pub mod palette;
pub mod round;
pub mod rules;
pub mod session;
pub mod timer;

pub use controller::{GameController, GameEvent, GameStats, MissReason, Phase};
pub use error::GameError;
pub use palette::{Swatch, PALETTE};
pub use round::{Outcome, Round, GRID_COLS, GRID_SIZE};
pub use rules::{Rules, MAX_LIVES};
pub use session::Session;
pub use timer::{Countdown, TickOutcome, TimerState};
