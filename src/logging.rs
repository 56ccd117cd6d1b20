//! Logging setup.
//!
//! The TUI owns the terminal, so log output only goes to a file, and only
//! when one is requested with `--log-file`. Without it, `tracing` events are
//! dropped.

use std::fs::OpenOptions;
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Level;

/// Environment variable selecting the log level (default: info).
pub const LOG_LEVEL_ENV: &str = "COLORTAP_LOG";

/// Parse a level name, falling back to INFO.
pub fn parse_level(value: Option<&str>) -> Level {
    value
        .and_then(|v| Level::from_str(v.trim()).ok())
        .unwrap_or(Level::INFO)
}

/// Install a file logger if `log_file` is given.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let level = parse_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref());

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(())
}
