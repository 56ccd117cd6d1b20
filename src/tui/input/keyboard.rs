//! Keyboard input handling for the game screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Action, CursorMove, InputContext};

/// Grid index for a numpad digit: 7 8 9 is the top row, 1 2 3 the bottom.
pub fn numpad_index(digit: char) -> Option<usize> {
    let n = digit.to_digit(10)? as usize;
    if n == 0 {
        return None;
    }
    let row_from_bottom = (n - 1) / 3;
    let col = (n - 1) % 3;
    Some((2 - row_from_bottom) * 3 + col)
}

/// Map a key press to an action.
pub fn map_key_event(key: KeyEvent, ctx: InputContext) -> Action {
    // If help is showing, any key closes it
    if ctx.show_help {
        return Action::CloseHelp;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,

        // === Game ===
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Restart,
        KeyCode::Enter if ctx.game_over => Action::Restart,
        _ if ctx.game_over => Action::None,

        // === Picking ===
        KeyCode::Char(c) if c.is_ascii_digit() => {
            numpad_index(c).map(Action::Tap).unwrap_or(Action::None)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Action::TapCursor,

        // === Cursor ===
        KeyCode::Up | KeyCode::Char('k') => Action::MoveCursor(CursorMove::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::MoveCursor(CursorMove::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::MoveCursor(CursorMove::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::MoveCursor(CursorMove::Right),

        _ => Action::None,
    }
}
