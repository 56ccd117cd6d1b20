//! TUI widgets for colortap
//!
//! Reusable UI components for the game screen.

pub mod stats_bar;
pub mod swatch_grid;
pub mod target_card;

pub use stats_bar::StatsBar;
pub use swatch_grid::{SwatchGrid, KEY_HINTS};
pub use target_card::TargetCard;
