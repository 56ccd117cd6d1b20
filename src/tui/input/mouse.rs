//! Mouse input handling for the game screen.
//!
//! A left click on a grid cell is a tap; on the game-over modal only the
//! restart button responds.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use super::{Action, InputContext};
use crate::tui::app::layout::{game_over_area, restart_button_area, GameLayout};

/// Map a mouse event to an action using the last drawn layout.
pub fn map_mouse_event(
    mouse: MouseEvent,
    layout: &GameLayout,
    screen: Rect,
    ctx: InputContext,
) -> Action {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return Action::None;
    }
    if ctx.show_help {
        return Action::CloseHelp;
    }

    if ctx.game_over {
        let button = restart_button_area(game_over_area(screen));
        return if button.contains(Position::new(mouse.column, mouse.row)) {
            Action::Restart
        } else {
            Action::None
        };
    }

    layout
        .cell_at(mouse.column, mouse.row)
        .map(Action::Tap)
        .unwrap_or(Action::None)
}
