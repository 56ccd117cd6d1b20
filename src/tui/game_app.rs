//! Game screen TUI application
//!
//! Shows the target card, stats, the 3×3 grid and feedback, and forwards
//! clicks and keys to the `GameController`.
//!
//! `GameScreen` holds everything except the terminal so it can be rendered
//! into a test backend; `GameApp` pairs it with the real terminal.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event;
use ratatui::{layout::Rect, Frame};

use super::app::layout::{build_game_layout, GameLayout};
use super::app::modals::{render_game_over_modal, render_help_modal};
use super::app::status_footer::{render_footer, render_status_line, StatusTone};
use super::app::{App, TuiApp};
use super::input::{map_key_event, map_mouse_event, move_cursor, Action, InputContext};
use super::theme::Theme;
use super::widgets::{StatsBar, SwatchGrid, TargetCard};
use crate::config::DisplayConfig;
use crate::game::{GameController, GameEvent, MissReason, GRID_SIZE};

/// Footer hints while playing.
const PLAY_KEYS: &[(&str, &str)] = &[
    ("click/1-9", "pick"),
    ("r", "restart"),
    ("?", "help"),
    ("q", "quit"),
];

/// Footer hints after game over.
const GAME_OVER_KEYS: &[(&str, &str)] = &[("Enter/r", "restart"), ("q", "quit")];

/// Game state plus view state, independent of the terminal.
pub struct GameScreen {
    controller: GameController,
    theme: Theme,
    show_key_hints: bool,
    show_help: bool,
    /// Keyboard cursor cell
    cursor: usize,
    /// Cursor is only drawn once the player has used the arrow keys
    cursor_visible: bool,
    status: Option<(String, StatusTone)>,
    /// Layout of the last drawn frame, for mouse hit-testing
    layout: Option<GameLayout>,
    screen: Rect,
    quit: bool,
}

impl GameScreen {
    pub fn new(controller: GameController, display: &DisplayConfig) -> Self {
        Self {
            controller,
            theme: Theme::by_name(&display.theme),
            show_key_hints: display.show_key_hints,
            show_help: false,
            cursor: GRID_SIZE / 2,
            cursor_visible: false,
            status: Some(("Get ready...".to_string(), StatusTone::Info)),
            layout: None,
            screen: Rect::default(),
            quit: false,
        }
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    pub fn into_controller(self) -> GameController {
        self.controller
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current status message, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(text, _)| text.as_str())
    }

    fn input_context(&self) -> InputContext {
        InputContext {
            show_help: self.show_help,
            game_over: self.controller.is_game_over(),
        }
    }

    /// Translate a terminal event into an action and apply it.
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        let action = match event {
            Event::Key(key) => map_key_event(key, self.input_context()),
            Event::Mouse(mouse) => match self.layout {
                Some(ref layout) => map_mouse_event(mouse, layout, self.screen, self.input_context()),
                None => Action::None,
            },
            // Layout is recomputed on every draw
            _ => Action::None,
        };
        self.apply(action)
    }

    /// Apply an action to the game and view state.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::None => {}
            Action::Quit => self.quit = true,
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::CloseHelp => self.show_help = false,
            Action::Restart => {
                let events = self.controller.restart();
                self.on_events(&events);
            }
            Action::Tap(index) => {
                let events = self.controller.tap(index)?;
                self.on_events(&events);
            }
            Action::MoveCursor(direction) => {
                if self.cursor_visible {
                    self.cursor = move_cursor(self.cursor, direction);
                }
                self.cursor_visible = true;
            }
            Action::TapCursor => {
                if self.cursor_visible {
                    let events = self.controller.tap(self.cursor)?;
                    self.on_events(&events);
                } else {
                    self.cursor_visible = true;
                }
            }
        }
        Ok(())
    }

    /// Advance game time.
    pub fn update(&mut self, elapsed: Duration) {
        let events = self.controller.advance(elapsed);
        self.on_events(&events);
    }

    fn on_events(&mut self, events: &[GameEvent]) {
        for event in events {
            let status = match event {
                GameEvent::Hit { score } => Some((format!("Nice! Score {}", score), StatusTone::Good)),
                GameEvent::SpeedUp { time_limit_ms } => Some((
                    format!("Faster! {:.1}s per round", *time_limit_ms as f64 / 1000.0),
                    StatusTone::Good,
                )),
                GameEvent::Miss {
                    reason: MissReason::WrongColor(swatch),
                    lives,
                } => Some((
                    format!("That was {}. {} left", swatch, lives_text(*lives)),
                    StatusTone::Bad,
                )),
                GameEvent::Miss {
                    reason: MissReason::Timeout,
                    lives,
                } => Some((
                    format!("Too slow! {} left", lives_text(*lives)),
                    StatusTone::Bad,
                )),
                GameEvent::GameOver { score } => {
                    Some((format!("Game over - final score {}", score), StatusTone::Bad))
                }
                GameEvent::Restarted => Some(("New game. Get ready...".to_string(), StatusTone::Info)),
                GameEvent::TimerStarted { .. } | GameEvent::RoundStarted { .. } => None,
            };
            if let Some(status) = status {
                self.status = Some(status);
            }
        }
    }

    /// Draw the whole screen.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let layout = build_game_layout(area);
        self.layout = Some(layout);
        self.screen = area;

        let controller = &self.controller;
        let session = controller.session();
        let round = controller.round();
        let theme = &self.theme;

        frame.render_widget(TargetCard::new(round, theme), layout.header);
        frame.render_widget(
            StatsBar::new(
                session,
                controller.rules().starting_lives,
                controller.remaining_ms(),
                round.time_limit_ms,
                theme,
            ),
            layout.stats,
        );
        frame.render_widget(
            SwatchGrid::new(&round.grid, &layout.cells, theme)
                .cursor(self.cursor_visible.then_some(self.cursor))
                .key_hints(self.show_key_hints)
                .dimmed(!controller.accepts_taps()),
            layout.grid,
        );

        if let Some((text, tone)) = &self.status {
            render_status_line(frame, layout.status, text, *tone, theme);
        }
        let keys = if session.game_over {
            GAME_OVER_KEYS
        } else {
            PLAY_KEYS
        };
        render_footer(frame, layout.footer, keys, theme);

        if session.game_over {
            render_game_over_modal(frame, area, session, controller.stats(), theme);
        }
        if self.show_help {
            render_help_modal(frame, area, theme);
        }
    }
}

fn lives_text(lives: u32) -> String {
    if lives == 1 {
        "1 life".to_string()
    } else {
        format!("{} lives", lives)
    }
}

/// Interactive game bound to the real terminal.
pub struct GameApp {
    app: App,
    screen: GameScreen,
}

impl GameApp {
    /// Take over the terminal and start a game.
    pub fn new(controller: GameController, display: &DisplayConfig, frame_interval: Duration) -> Result<Self> {
        let app = App::new(frame_interval)?;
        Ok(Self {
            app,
            screen: GameScreen::new(controller, display),
        })
    }

    /// Release the terminal and hand back the controller.
    pub fn finish(self) -> GameController {
        let GameApp { app, screen } = self;
        drop(app);
        screen.into_controller()
    }
}

// --- TuiApp trait implementation ---

impl TuiApp for GameApp {
    fn app(&mut self) -> &mut App {
        &mut self.app
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        self.screen.handle_event(event)?;
        if self.screen.should_quit() {
            self.app.quit();
        }
        Ok(())
    }

    fn update(&mut self, elapsed: Duration) -> Result<()> {
        // Time stands still while the help overlay is open
        if !self.screen.show_help() {
            self.screen.update(elapsed);
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let screen = &mut self.screen;
        self.app.draw(|frame| screen.render(frame))
    }
}
