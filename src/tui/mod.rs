//! TUI (Text User Interface) module for colortap
//!
//! This module provides the terminal game screen using ratatui/crossterm.
//! It handles terminal resize, mouse clicks and keyboard input.

pub mod app;
pub mod game_app;
pub mod input;
pub mod theme;
pub mod widgets;

// Re-export the app, trait, and theme helpers for commands and external use
pub use app::{App, TuiApp};
pub use game_app::{GameApp, GameScreen};
pub use theme::{current_theme, Theme};
