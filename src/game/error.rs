//! Game input errors.

use super::round::GRID_SIZE;

/// Errors surfaced by the game controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Grid cell {index} is out of range (grid has {} cells)", GRID_SIZE)]
    CellOutOfRange { index: usize },
}
