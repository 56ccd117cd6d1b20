//! colortap - terminal reflex game

mod commands;

use anyhow::Result;
use clap::Parser;

use colortap::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    colortap::logging::init(cli.log_file.as_deref())?;

    match cli.command {
        None => commands::play::handle(&Default::default()),
        Some(Commands::Play(args)) => commands::play::handle(&args),
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Migrate { yes } => commands::config::handle_migrate(yes),
        },
        Some(Commands::Completions { shell }) => commands::completions::handle(shell),
    }
}
