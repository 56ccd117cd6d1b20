//! Status line and footer rendering for the game screen
//!
//! The status line shows feedback for the last action (hit, miss, timeout);
//! the footer shows keybinding hints for the current mode.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme::Theme;

/// Tone of a status message, mapped to a theme color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Good,
    Bad,
}

/// Render a centered status line in the color matching `tone`.
pub fn render_status_line(frame: &mut Frame, area: Rect, text: &str, tone: StatusTone, theme: &Theme) {
    let style = match tone {
        StatusTone::Info => theme.text_secondary_style(),
        StatusTone::Good => theme.success_style(),
        StatusTone::Bad => theme.error_style(),
    };
    let status = Paragraph::new(text.to_string())
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(status, area);
}

/// Render a centered footer with keybinding hints.
///
/// Takes pairs of (key, description) and joins them with " | " separators.
///
/// Example: `&[("q", "quit"), ("?", "help")]` renders as `"q: quit | ?: help"`.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], theme: &Theme) {
    let spans: Vec<Span<'static>> = build_footer_spans(keys, theme);
    let footer = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(theme.text_secondary))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Build styled spans for footer keybinding hints.
///
/// Each key is highlighted with the theme accent color, descriptions use
/// the secondary text color, and entries are separated by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " | ".to_string(),
                Style::default().fg(theme.text_secondary),
            ));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(theme.accent),
        ));
        spans.push(Span::styled(
            format!(": {}", desc),
            Style::default().fg(theme.text_secondary),
        ));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_spans_join_with_separators() {
        let theme = Theme::default();
        let spans = build_footer_spans(&[("q", "quit"), ("?", "help")], &theme);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();

        assert_eq!(text, "q: quit | ?: help");
        assert_eq!(spans[0].style.fg, Some(theme.accent));
        assert_eq!(spans[1].style.fg, Some(theme.text_secondary));
    }

    #[test]
    fn empty_footer_has_no_spans() {
        assert!(build_footer_spans(&[], &Theme::default()).is_empty());
    }
}
