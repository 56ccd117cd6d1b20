//! Score, lives and time-left line.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{LineGauge, Paragraph, Widget},
};

use crate::game::Session;
use crate::tui::theme::Theme;

pub struct StatsBar<'a> {
    session: &'a Session,
    starting_lives: u32,
    remaining_ms: u64,
    round_limit_ms: u64,
    theme: &'a Theme,
}

impl<'a> StatsBar<'a> {
    pub fn new(
        session: &'a Session,
        starting_lives: u32,
        remaining_ms: u64,
        round_limit_ms: u64,
        theme: &'a Theme,
    ) -> Self {
        Self {
            session,
            starting_lives,
            remaining_ms,
            round_limit_ms,
            theme,
        }
    }
}

/// Most hearts drawn before switching to the "♥ x12" form.
const MAX_HEARTS: u32 = 10;

/// Hearts for the lives display, e.g. "♥♥♡" for 2 of 3.
pub fn format_lives(lives: u32, starting_lives: u32) -> String {
    let total = starting_lives.max(lives);
    if total > MAX_HEARTS {
        return format!("♥ x{}", lives);
    }
    (0..total)
        .map(|i| if i < lives { '♥' } else { '♡' })
        .collect()
}

/// Seconds with one decimal, e.g. 1860 -> "1.9s".
pub fn format_seconds(ms: u64) -> String {
    format!("{:.1}s", ms as f64 / 1000.0)
}

impl Widget for StatsBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(10)])
            .split(area);

        let line = Line::from(vec![
            Span::styled(" Score ", self.theme.text_secondary_style()),
            Span::styled(self.session.score.to_string(), self.theme.accent_bold_style()),
            Span::styled("  Lives ", self.theme.text_secondary_style()),
            Span::styled(
                format_lives(self.session.lives, self.starting_lives),
                self.theme.error_style(),
            ),
        ]);
        Paragraph::new(line).render(chunks[0], buf);

        let ratio = if self.round_limit_ms == 0 {
            0.0
        } else {
            (self.remaining_ms as f64 / self.round_limit_ms as f64).clamp(0.0, 1.0)
        };
        let gauge_style = if ratio < 0.3 {
            self.theme.error_style()
        } else {
            self.theme.accent_style()
        };
        LineGauge::default()
            .filled_style(gauge_style)
            .unfilled_style(Style::default().fg(self.theme.text_secondary))
            .line_set(symbols::line::THICK)
            .label(format!(
                "{} / {}",
                format_seconds(self.remaining_ms),
                format_seconds(self.round_limit_ms)
            ))
            .ratio(ratio)
            .render(chunks[1], buf);
    }
}
