//! The 3×3 swatch grid.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::game::{Swatch, GRID_SIZE};
use crate::tui::theme::Theme;

/// Numpad key shown in each cell, row-major (7 8 9 / 4 5 6 / 1 2 3).
pub const KEY_HINTS: [char; GRID_SIZE] = ['7', '8', '9', '4', '5', '6', '1', '2', '3'];

pub struct SwatchGrid<'a> {
    grid: &'a [Swatch; GRID_SIZE],
    cells: &'a [Rect; GRID_SIZE],
    theme: &'a Theme,
    cursor: Option<usize>,
    show_key_hints: bool,
    dimmed: bool,
}

impl<'a> SwatchGrid<'a> {
    pub fn new(grid: &'a [Swatch; GRID_SIZE], cells: &'a [Rect; GRID_SIZE], theme: &'a Theme) -> Self {
        Self {
            grid,
            cells,
            theme,
            cursor: None,
            show_key_hints: false,
            dimmed: false,
        }
    }

    /// Highlight the keyboard cursor cell.
    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn key_hints(mut self, show: bool) -> Self {
        self.show_key_hints = show;
        self
    }

    /// Draw swatches as outlines only (input is not accepted right now).
    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }
}

impl Widget for SwatchGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, (&swatch, &cell)) in self.grid.iter().zip(self.cells.iter()).enumerate() {
            let cell = cell.intersection(area);
            if cell.is_empty() {
                continue;
            }

            let selected = self.cursor == Some(i);
            let (border_set, border_style) = if selected {
                (border::THICK, self.theme.accent_bold_style())
            } else {
                (border::ROUNDED, self.theme.text_secondary_style())
            };

            let fill = if self.dimmed {
                Style::default().fg(self.theme.text_secondary)
            } else {
                self.theme.swatch_style(swatch)
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_set(border_set)
                .border_style(border_style);
            let inner = block.inner(cell);
            block.render(cell, buf);
            Block::default().style(fill).render(inner, buf);

            if self.show_key_hints && inner.height > 0 {
                let hint_style = Style::default()
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD);
                Paragraph::new(KEY_HINTS[i].to_string())
                    .style(hint_style)
                    .alignment(Alignment::Right)
                    .render(Rect::new(inner.x, inner.y, inner.width, 1), buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::layout::grid_cells;
    use crate::tui::theme::swatch_color;

    fn sample_grid() -> [Swatch; GRID_SIZE] {
        [
            Swatch::Red,
            Swatch::Orange,
            Swatch::Yellow,
            Swatch::Green,
            Swatch::Cyan,
            Swatch::Blue,
            Swatch::Purple,
            Swatch::Pink,
            Swatch::Red,
        ]
    }

    #[test]
    fn paints_each_cell_with_its_swatch() {
        let area = Rect::new(0, 0, 60, 18);
        let cells = grid_cells(area);
        let grid = sample_grid();
        let theme = Theme::default();
        let mut buf = Buffer::empty(area);

        SwatchGrid::new(&grid, &cells, &theme).render(area, &mut buf);

        for (swatch, cell) in grid.iter().zip(cells.iter()) {
            let center = buf[(cell.x + cell.width / 2, cell.y + cell.height / 2)].clone();
            assert_eq!(center.bg, swatch_color(*swatch));
        }
    }

    #[test]
    fn key_hints_follow_numpad_layout() {
        let area = Rect::new(0, 0, 60, 18);
        let cells = grid_cells(area);
        let grid = sample_grid();
        let theme = Theme::default();
        let mut buf = Buffer::empty(area);

        SwatchGrid::new(&grid, &cells, &theme)
            .key_hints(true)
            .render(area, &mut buf);

        // Top-left cell shows 7, bottom-right shows 3 (right-aligned, first inner row)
        let top_left = cells[0];
        assert_eq!(buf[(top_left.right() - 2, top_left.y + 1)].symbol(), "7");
        let bottom_right = cells[8];
        assert_eq!(buf[(bottom_right.right() - 2, bottom_right.y + 1)].symbol(), "3");
    }

    #[test]
    fn dimmed_grid_hides_colors() {
        let area = Rect::new(0, 0, 60, 18);
        let cells = grid_cells(area);
        let grid = sample_grid();
        let theme = Theme::default();
        let mut buf = Buffer::empty(area);

        SwatchGrid::new(&grid, &cells, &theme)
            .dimmed(true)
            .render(area, &mut buf);

        let cell = cells[4];
        let center = &buf[(cell.x + cell.width / 2, cell.y + cell.height / 2)];
        assert_ne!(center.bg, swatch_color(Swatch::Cyan));
    }

    #[test]
    fn cursor_cell_uses_thick_border() {
        let area = Rect::new(0, 0, 60, 18);
        let cells = grid_cells(area);
        let grid = sample_grid();
        let theme = Theme::default();
        let mut buf = Buffer::empty(area);

        SwatchGrid::new(&grid, &cells, &theme)
            .cursor(Some(4))
            .render(area, &mut buf);

        let selected = cells[4];
        assert_eq!(buf[(selected.x, selected.y)].symbol(), border::THICK.top_left);
        let other = cells[0];
        assert_eq!(buf[(other.x, other.y)].symbol(), border::ROUNDED.top_left);
    }
}
