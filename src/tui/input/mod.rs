//! Input handling for the game screen.
//!
//! Keyboard and mouse events are mapped to an `Action`; the screen then
//! applies the action to the game. Mapping is pure so it can be tested
//! without a terminal.

mod keyboard;
mod mouse;

pub use keyboard::{map_key_event, numpad_index};
pub use mouse::map_mouse_event;

use crate::game::{GRID_COLS, GRID_SIZE};

/// What an input event asks the screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do
    None,
    Quit,
    ToggleHelp,
    /// Any key closes the help overlay
    CloseHelp,
    Restart,
    /// Tap grid cell by index (row-major)
    Tap(usize),
    MoveCursor(CursorMove),
    /// Tap the cell under the keyboard cursor
    TapCursor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Left,
    Right,
}

/// Screen state the mapping depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputContext {
    pub show_help: bool,
    pub game_over: bool,
}

/// Move the keyboard cursor one cell, stopping at the grid edges.
pub fn move_cursor(cursor: usize, direction: CursorMove) -> usize {
    let cursor = cursor.min(GRID_SIZE - 1);
    let row = cursor / GRID_COLS;
    let col = cursor % GRID_COLS;
    let (row, col) = match direction {
        CursorMove::Up => (row.saturating_sub(1), col),
        CursorMove::Down => ((row + 1).min(GRID_COLS - 1), col),
        CursorMove::Left => (row, col.saturating_sub(1)),
        CursorMove::Right => (row, (col + 1).min(GRID_COLS - 1)),
    };
    row * GRID_COLS + col
}
