//! Play command handler

use anyhow::{bail, Result};

use colortap::cli::PlayArgs;
use colortap::tui::{GameApp, Theme, TuiApp};
use colortap::{Config, GameController, GameSummary};

/// Apply command line overrides on top of the loaded config.
pub fn apply_overrides(config: &mut Config, args: &PlayArgs) {
    if let Some(lives) = args.lives {
        config.rules.starting_lives = lives;
    }
    if let Some(limit) = args.time_limit {
        config.rules.initial_time_limit_ms = limit;
    }
    if let Some(theme) = &args.theme {
        config.display.theme = theme.clone();
    }
}

/// Run an interactive game and print the summary once the player quits.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &PlayArgs) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        bail!("colortap needs an interactive terminal");
    }

    let mut config = Config::load()?;
    apply_overrides(&mut config, args);

    let controller = match args.seed {
        Some(seed) => GameController::with_seed(config.rules.clone(), seed),
        None => GameController::from_entropy(config.rules.clone()),
    };
    tracing::debug!(seed = ?args.seed, theme = %config.display.theme, "starting play");

    let mut app = GameApp::new(controller, &config.display, config.frame_interval())?;
    let run_result = app.run();
    let controller = app.finish();
    run_result?;

    let summary = GameSummary::from_controller(&controller);
    tracing::info!(score = summary.score, best = summary.best_score, "session ended");
    if args.json {
        println!("{}", summary.to_json()?);
    } else {
        println!("{}", summary.to_text(&Theme::by_name(&config.display.theme)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_config_values() {
        let mut config = Config::default();
        let args = PlayArgs {
            lives: Some(5),
            time_limit: Some(2000),
            theme: Some("ocean".to_string()),
            ..PlayArgs::default()
        };
        apply_overrides(&mut config, &args);

        assert_eq!(config.rules.starting_lives, 5);
        assert_eq!(config.rules.initial_time_limit_ms, 2000);
        assert_eq!(config.display.theme, "ocean");
    }

    #[test]
    fn no_overrides_leave_config_untouched() {
        let mut config = Config::default();
        apply_overrides(&mut config, &PlayArgs::default());
        assert_eq!(config, Config::default());
    }
}
