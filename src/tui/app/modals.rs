//! Modal overlays: help and game over.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::{game_over_area, modal_area, RESTART_LABEL};
use crate::game::{GameStats, Session};
use crate::tui::theme::Theme;

/// Help text as (key, description) rows grouped by section.
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Play",
        &[
            ("click", "Pick a swatch"),
            ("7 8 9 / 4 5 6 / 1 2 3", "Pick by numpad position"),
            ("arrows + Enter", "Move cursor and pick"),
        ],
    ),
    (
        "Game",
        &[
            ("r", "Restart"),
            ("?", "Toggle this help"),
            ("q / Esc", "Quit"),
        ],
    ),
];

fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Find the swatch named in the card.",
            theme.text_style(),
        )),
        Line::from(Span::styled(
            "Read the word, not the ink!",
            theme.text_secondary_style(),
        )),
    ];
    for (section, keys) in HELP_SECTIONS {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            section.to_string(),
            theme.accent_bold_style(),
        )));
        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<24}", key), theme.accent_style()),
                Span::styled(desc.to_string(), theme.text_style()),
            ]));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        theme.text_secondary_style(),
    )));
    lines
}

/// Render the help modal overlay.
pub fn render_help_modal(frame: &mut Frame, area: Rect, theme: &Theme) {
    let modal = modal_area(area, 56, 18);
    frame.render_widget(Clear, modal);

    let help = Paragraph::new(build_help_text(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(help, modal);
}

fn build_game_over_lines(session: &Session, stats: &GameStats, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::from(vec![
            Span::styled("Final score: ", theme.text_style()),
            Span::styled(session.score.to_string(), theme.accent_bold_style()),
        ]),
        Line::from(Span::styled(
            format!("Best this run: {}", stats.best_score),
            theme.text_secondary_style(),
        )),
        Line::default(),
        Line::from(Span::styled(
            RESTART_LABEL,
            theme
                .accent_bold_style()
                .add_modifier(Modifier::REVERSED),
        )),
    ]
}

/// Render the game-over modal with its single Restart action.
///
/// The restart button position matches `layout::restart_button_area`.
pub fn render_game_over_modal(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    stats: &GameStats,
    theme: &Theme,
) {
    let modal = game_over_area(area);
    frame.render_widget(Clear, modal);

    let body = Paragraph::new(build_game_over_lines(session, stats, theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.error_style())
                .title(" Game Over "),
        )
        .alignment(Alignment::Center);
    frame.render_widget(body, modal);
}
