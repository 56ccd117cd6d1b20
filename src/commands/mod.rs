//! Command handlers for the colortap binary

pub mod completions;
pub mod config;
pub mod play;
