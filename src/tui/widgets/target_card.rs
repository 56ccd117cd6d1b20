//! Target card: the swatch to find and its name.
//!
//! The name is printed in a *different* color from the palette, so the
//! player has to read the word and ignore the ink.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::game::Round;
use crate::tui::theme::{swatch_color, Theme};

pub struct TargetCard<'a> {
    round: &'a Round,
    theme: &'a Theme,
}

impl<'a> TargetCard<'a> {
    pub fn new(round: &'a Round, theme: &'a Theme) -> Self {
        Self { round, theme }
    }
}

impl Widget for TargetCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.text_secondary_style())
            .title(" Find ");
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(8), Constraint::Min(1)])
            .split(inner);

        // Solid swatch on the left
        let swatch = Block::default().style(self.theme.swatch_style(self.round.target));
        swatch.render(chunks[0], buf);

        let label = Line::from(vec![
            Span::styled("Tap ", self.theme.text_style()),
            Span::styled(
                self.round.target.name().to_uppercase(),
                Style::default()
                    .fg(swatch_color(self.round.label_color))
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(vec![Line::default(), label])
            .alignment(Alignment::Center)
            .render(chunks[1], buf);
    }
}
