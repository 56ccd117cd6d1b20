//! Terminal application plumbing shared by TUI screens.
//!
//! `App` owns the ratatui terminal: raw mode, alternate screen and mouse
//! capture are enabled on creation and restored on drop, including on error
//! paths. `TuiApp` is the trait a screen implements to get the standard
//! poll/update/draw loop.

pub mod layout;
pub mod modals;
pub mod status_footer;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

/// Base terminal state for a TUI screen.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Maximum time to wait for input before the next update
    tick_rate: Duration,
    running: bool,
}

impl App {
    /// Take over the terminal.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self {
            terminal,
            tick_rate,
            running: true,
        })
    }

    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Wait up to one tick for an input event.
    ///
    /// Key release/repeat events are filtered out so each press counts once.
    pub fn next_event(&self) -> Result<Option<Event>> {
        if !event::poll(self.tick_rate)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Press => Ok(None),
            other => Ok(Some(other)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    fn restore(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::error!(error = %e, "failed to restore terminal");
        }
    }
}

/// A screen driven by the standard event loop.
pub trait TuiApp {
    fn app(&mut self) -> &mut App;

    /// React to one input event.
    fn handle_event(&mut self, event: Event) -> Result<()>;

    /// Advance time-based state by `elapsed`.
    fn update(&mut self, elapsed: Duration) -> Result<()>;

    fn draw(&mut self) -> Result<()>;

    /// Run until the screen quits.
    #[cfg(not(tarpaulin_include))]
    fn run(&mut self) -> Result<()> {
        let mut last = Instant::now();
        while self.app().is_running() {
            self.draw()?;

            if let Some(event) = self.app().next_event()? {
                self.handle_event(event)?;
            }

            let now = Instant::now();
            self.update(now - last)?;
            last = now;
        }
        Ok(())
    }
}
