//! colortap - a terminal reflex game
//!
//! A target color is named on screen; find the matching swatch in a 3×3
//! grid before the countdown runs out. Hits score points and every third
//! one shortens the clock; misses and timeouts cost a life.
//!
//! - `game`: rounds, countdown and session controller (no terminal needed)
//! - `tui`: the ratatui game screen
//! - `config`: TOML configuration
//! - `cli`: command line definitions

pub mod cli;
pub mod config;
pub mod game;
pub mod logging;
pub mod summary;
pub mod tui;

pub use config::Config;
pub use game::{GameController, Rules};
pub use summary::GameSummary;
