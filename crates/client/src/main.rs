//! Pairstrike client binary.
//!
//! Composition root: reads configuration, sets up logging, builds a runtime
//! with a bot selection provider, plays one round and prints the leaderboard.

mod config;
mod logging;
mod report;

use anyhow::{Context, Result};
use runtime::{RoundContent, Runtime, Topic};

use crate::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    logging::setup_logging()?;

    tracing::info!(
        player = %config.player_name,
        bot = %config.bot,
        seed = ?config.seed,
        "Starting Pairstrike"
    );

    let content = match &config.content_dir {
        Some(dir) => RoundContent::load(dir),
        None => RoundContent::builtin(),
    };

    let runtime = Runtime::builder()
        .config(config.runtime_config())
        .content(content)
        .provider(config.bot.build(config.seed))
        .build()
        .await
        .context("failed to start the round")?;

    let snapshot = runtime.handle().query_state().await?;
    report::print_round_header(&snapshot);

    let combat_log = tokio::spawn(report::print_combat(runtime.subscribe(Topic::Combat)));

    let result = runtime.run().await.context("round aborted")?;
    combat_log.abort();

    report::print_result(&config.player_name, &result);

    match runtime.leaderboard(config.leaderboard_size) {
        Ok(leaderboard) => report::print_leaderboard(&leaderboard),
        Err(error) => tracing::warn!(%error, "Leaderboard unavailable"),
    }

    runtime.shutdown().await?;
    Ok(())
}
