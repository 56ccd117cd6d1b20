//! Round generation and resolution.
//!
//! A round is a target swatch, a decoy color for the label text, and a 3×3
//! grid that always contains the target.

use rand::seq::SliceRandom;
use rand::Rng;

use super::palette::{Swatch, PALETTE};
use super::rules::Rules;

/// Number of cells in the grid.
pub const GRID_SIZE: usize = 9;
/// Number of columns (and rows) in the grid.
pub const GRID_COLS: usize = 3;

/// Result of a tap against the current target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Hit,
    Miss,
}

/// One round as shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// The color the player must find
    pub target: Swatch,
    /// Color of the label text; never equal to `target`
    pub label_color: Swatch,
    /// Grid cells in row-major order
    pub grid: [Swatch; GRID_SIZE],
    /// Time allowed for this round, in milliseconds
    pub time_limit_ms: u64,
}

impl Round {
    /// Generate a fresh round with the given time limit.
    pub fn generate<R: Rng + ?Sized>(time_limit_ms: u64, rules: &Rules, rng: &mut R) -> Self {
        let target = pick_target(rng);
        let label_color = pick_label_color(target, rng);
        let grid = new_grid(target, rules.allow_duplicate_target, rng);
        Self {
            target,
            label_color,
            grid,
            time_limit_ms,
        }
    }

    /// Swatch at a grid index, if the index is on the grid.
    pub fn cell(&self, index: usize) -> Option<Swatch> {
        self.grid.get(index).copied()
    }

    /// Number of cells showing the target color.
    pub fn target_count(&self) -> usize {
        self.grid.iter().filter(|&&s| s == self.target).count()
    }

    /// Resolve a tap on the given swatch against this round's target.
    pub fn resolve(&self, tapped: Swatch) -> Outcome {
        resolve_tap(tapped, self.target)
    }
}

/// Uniform random choice from the palette.
pub fn pick_target<R: Rng + ?Sized>(rng: &mut R) -> Swatch {
    PALETTE[rng.gen_range(0..PALETTE.len())]
}

/// Uniform random choice from the palette, excluding `target`.
pub fn pick_label_color<R: Rng + ?Sized>(target: Swatch, rng: &mut R) -> Swatch {
    let target_pos = palette_index(target);
    let idx = rng.gen_range(0..PALETTE.len() - 1);
    // Skip over the target's slot so every other swatch is equally likely
    if idx >= target_pos {
        PALETTE[idx + 1]
    } else {
        PALETTE[idx]
    }
}

/// Build a shuffled grid containing `target`.
///
/// The target is placed at a random slot and the remaining cells are drawn
/// with replacement. When `allow_duplicate_target` is false the filler draws
/// skip the target, so exactly one cell matches.
pub fn new_grid<R: Rng + ?Sized>(
    target: Swatch,
    allow_duplicate_target: bool,
    rng: &mut R,
) -> [Swatch; GRID_SIZE] {
    let target_slot = rng.gen_range(0..GRID_SIZE);
    let mut grid = [target; GRID_SIZE];

    for (i, cell) in grid.iter_mut().enumerate() {
        if i == target_slot {
            continue;
        }
        *cell = if allow_duplicate_target {
            pick_target(rng)
        } else {
            pick_label_color(target, rng)
        };
    }

    grid.shuffle(rng);
    grid
}

/// Compare the tapped swatch against the target.
pub fn resolve_tap(tapped: Swatch, target: Swatch) -> Outcome {
    if tapped == target {
        Outcome::Hit
    } else {
        Outcome::Miss
    }
}

/// Compute the time limit after a correct answer brought the score to `score`.
///
/// Every `speedup_every`-th correct answer multiplies the limit by the
/// speed-up factor, rounded, and floors it at the minimum.
pub fn advance_difficulty(current_limit_ms: u64, score: u32, rules: &Rules) -> u64 {
    let every = rules.speedup_every.max(1);
    if score == 0 || score % every != 0 {
        return current_limit_ms;
    }
    let scaled = (current_limit_ms as f64 * rules.speedup_factor).round() as u64;
    scaled.max(rules.min_time_limit_ms)
}

fn palette_index(swatch: Swatch) -> usize {
    PALETTE.iter().position(|&s| s == swatch).unwrap_or(0)
}
