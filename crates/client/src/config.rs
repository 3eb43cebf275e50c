//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use runtime::{BotKind, Leaderboard, RuntimeConfig};

/// Everything the binary needs to play one round.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub player_name: String,
    pub results_dir: Option<PathBuf>,
    pub content_dir: Option<PathBuf>,
    pub leaderboard_size: usize,
    pub seed: Option<u64>,
    pub bot: BotKind,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            player_name: RuntimeConfig::DEFAULT_PLAYER_NAME.to_string(),
            results_dir: None,
            content_dir: None,
            leaderboard_size: Leaderboard::DEFAULT_SIZE,
            seed: None,
            bot: BotKind::default(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PLAYER_NAME` - Name the result is stored under (default: `Player`)
    /// - `RESULTS_DIR` - Result directory (default: platform data dir)
    /// - `CONTENT_DIR` - Directory with `config.toml`, `payloads.ron` and
    ///   `layouts.json` (default: built-in content)
    /// - `LEADERBOARD_SIZE` - Rows printed after the round (default: 6)
    /// - `ROUND_SEED` - Seed for layout, shuffle and the random bot
    /// - `BOT_KIND` - `memory` or `random` (default: memory)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(name) = env::var("PLAYER_NAME")
            && !name.trim().is_empty()
        {
            config.player_name = name.trim().to_string();
        }

        config.results_dir = env::var_os("RESULTS_DIR").map(PathBuf::from);
        config.content_dir = env::var_os("CONTENT_DIR").map(PathBuf::from);

        if let Some(size) = read_env::<usize>("LEADERBOARD_SIZE") {
            config.leaderboard_size = size.max(1);
        }

        config.seed = read_env::<u64>("ROUND_SEED");

        if let Some(bot) = read_env::<BotKind>("BOT_KIND") {
            config.bot = bot;
        }

        config
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            player_name: self.player_name.clone(),
            results_dir: self.results_dir.clone(),
            seed: self.seed,
            ..RuntimeConfig::default()
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
