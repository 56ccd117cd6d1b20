//! Screen layout for the game view.
//!
//! Layout is computed once per frame and kept around so mouse clicks can
//! be mapped back to the grid cell (or button) that was drawn there.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::game::{GRID_COLS, GRID_SIZE};

/// Height of the target card at the top.
const HEADER_HEIGHT: u16 = 5;

/// Rectangles for every part of the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    pub header: Rect,
    pub stats: Rect,
    pub grid: Rect,
    pub cells: [Rect; GRID_SIZE],
    pub status: Rect,
    pub footer: Rect,
}

impl GameLayout {
    /// Grid cell under a screen position, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.cells.iter().position(|cell| cell.contains(pos))
    }
}

/// Split the frame into header, stats, grid, status and footer.
pub fn build_game_layout(area: Rect) -> GameLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Target card
            Constraint::Length(1),             // Score / lives / time
            Constraint::Min(3),                // Grid
            Constraint::Length(1),             // Status line
            Constraint::Length(1),             // Footer
        ])
        .split(area);

    let grid = chunks[2];
    GameLayout {
        header: chunks[0],
        stats: chunks[1],
        grid,
        cells: grid_cells(grid),
        status: chunks[3],
        footer: chunks[4],
    }
}

/// Lay out the 3×3 cells centered in `area`.
///
/// Cells aim for a roughly square look (terminal cells are about twice as
/// tall as wide) and are separated by a one-column gap.
pub fn grid_cells(area: Rect) -> [Rect; GRID_SIZE] {
    let cols = GRID_COLS as u16;
    let cell_h = (area.height / cols).max(1);
    let cell_w = (area.width.saturating_sub(cols - 1) / cols)
        .min(cell_h * 2 + 2)
        .max(1);

    let total_w = cell_w * cols + (cols - 1);
    let total_h = cell_h * cols;
    let x0 = area.x + area.width.saturating_sub(total_w) / 2;
    let y0 = area.y + area.height.saturating_sub(total_h) / 2;

    let mut cells = [Rect::default(); GRID_SIZE];
    for (i, cell) in cells.iter_mut().enumerate() {
        let col = (i % GRID_COLS) as u16;
        let row = (i / GRID_COLS) as u16;
        *cell = Rect::new(x0 + col * (cell_w + 1), y0 + row * cell_h, cell_w, cell_h);
    }
    cells
}

/// Centered modal area of at most `width` × `height`.
pub fn modal_area(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(4));
    let h = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

/// Size of the game-over modal.
pub const GAME_OVER_WIDTH: u16 = 36;
pub const GAME_OVER_HEIGHT: u16 = 9;
/// Label drawn on the restart button.
pub const RESTART_LABEL: &str = "[ Restart ]";
/// Inner line of the game-over modal holding the restart button.
pub const RESTART_LINE: u16 = 4;

/// Area of the game-over modal on the screen.
pub fn game_over_area(area: Rect) -> Rect {
    modal_area(area, GAME_OVER_WIDTH, GAME_OVER_HEIGHT)
}

/// Clickable area of the restart button inside the game-over modal.
///
/// The button is centered on inner line `RESTART_LINE`, the same place the
/// centered paragraph in the modal puts it.
pub fn restart_button_area(modal: Rect) -> Rect {
    let inner_w = modal.width.saturating_sub(2);
    let label_w = (RESTART_LABEL.len() as u16).min(inner_w);
    let x = modal.x + 1 + (inner_w - label_w) / 2;
    let y = modal.y + 1 + RESTART_LINE;
    Rect::new(x, y, label_w, 1)
}
