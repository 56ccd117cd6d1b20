//! End-of-game summary printed after the TUI exits.

use serde::Serialize;

use crate::game::GameController;
use crate::tui::Theme;

/// What the player achieved, as text or JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    /// Score of the last (current) game
    pub score: u32,
    /// Best score across all games this run
    pub best_score: u32,
    pub lives_left: u32,
    pub game_over: bool,
    pub games_played: u32,
    pub rounds: u32,
    pub hits: u32,
    pub misses: u32,
    pub timeouts: u32,
    /// Round time limit at exit, in milliseconds
    pub time_limit_ms: u64,
}

impl GameSummary {
    pub fn from_controller<R: rand::Rng>(controller: &GameController<R>) -> Self {
        let session = controller.session();
        let stats = controller.stats();
        Self {
            score: session.score,
            best_score: stats.best_score.max(session.score),
            lives_left: session.lives,
            game_over: session.game_over,
            games_played: stats.games_played,
            rounds: stats.rounds,
            hits: stats.hits,
            misses: stats.misses,
            timeouts: stats.timeouts,
            time_limit_ms: session.time_limit_ms,
        }
    }

    /// Hit rate in percent, if anything was tapped or timed out.
    pub fn accuracy(&self) -> Option<f64> {
        let attempts = self.hits + self.misses;
        (attempts > 0).then(|| self.hits as f64 * 100.0 / attempts as f64)
    }

    /// Human-readable summary using theme colors.
    pub fn to_text(&self, theme: &Theme) -> String {
        let mut lines = vec![
            format!(
                "{} {}",
                theme.primary_text("Score:"),
                theme.accent_text(&self.score.to_string())
            ),
            format!(
                "{} {}",
                theme.secondary_text("Best:"),
                theme.primary_text(&self.best_score.to_string())
            ),
        ];
        let accuracy = match self.accuracy() {
            Some(pct) => format!("{:.0}%", pct),
            None => "-".to_string(),
        };
        lines.push(theme.secondary_text(&format!(
            "{} hits, {} misses ({} timeouts), accuracy {}",
            self.hits, self.misses, self.timeouts, accuracy
        )));
        lines.push(theme.secondary_text(&format!(
            "Round time limit: {:.2}s, {} game(s) played",
            self.time_limit_ms as f64 / 1000.0,
            self.games_played
        )));
        if self.game_over {
            lines.push(theme.error_text("Game over"));
        }
        lines.join("\n")
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
