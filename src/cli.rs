//! Command line definitions.
//!
//! Kept in the library so completions and tests can build the same
//! `clap::Command` the binary uses.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Version string with build metadata.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("COLORTAP_BUILD_DATE"),
    ")"
);

/// Version string with build metadata.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("COLORTAP_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(
    name = "colortap",
    version = VERSION,
    about = "Terminal reflex game: tap the named color before time runs out",
    long_about = "Terminal reflex game: tap the named color before time runs out.\n\n\
        A color name is shown in the card at the top, printed in a different color.\n\
        Find the swatch matching the NAME in the 3x3 grid by clicking it or pressing\n\
        its numpad key (7 8 9 / 4 5 6 / 1 2 3). Every third hit shortens the clock.\n\
        Wrong picks and timeouts cost a life; three strikes and the game is over.\n\n\
        Running without a subcommand starts a game."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Write debug logs to this file (level from COLORTAP_LOG, default info)
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start a game (default)
    Play(PlayArgs),

    /// Show or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct PlayArgs {
    /// Seed the grid generator for a repeatable game
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Print the end-of-game summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Override the number of starting lives
    #[arg(long, value_name = "N")]
    pub lives: Option<u32>,

    /// Override the initial round time limit in milliseconds
    #[arg(long, value_name = "MS")]
    pub time_limit: Option<u64>,

    /// Override the theme (default, classic, ocean)
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Open the config file in $EDITOR
    Edit,
    /// Add missing fields to the config file
    Migrate {
        /// Apply changes without asking
        #[arg(long, short)]
        yes: bool,
    },
}
