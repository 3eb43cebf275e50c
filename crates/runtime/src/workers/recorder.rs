//! Persists the final record of a round.

use std::sync::Arc;

use game_core::GameResult;
use tracing::{info, warn};

use crate::events::ResultEvent;
use crate::repository::ResultRepository;

/// Writes a finished round's result for one player.
#[derive(Clone)]
pub struct ResultRecorder {
    player: String,
    repository: Arc<dyn ResultRepository>,
}

impl ResultRecorder {
    pub fn new(player: impl Into<String>, repository: Arc<dyn ResultRepository>) -> Self {
        Self {
            player: player.into(),
            repository,
        }
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    /// Saves `result` and describes what happened.
    ///
    /// A failed save is logged and reported, never propagated: the round is
    /// already over.
    pub fn record(&self, result: GameResult) -> ResultEvent {
        match self.repository.save(&self.player, &result) {
            Ok(()) => {
                info!(
                    target: "runtime::recorder",
                    player = %self.player,
                    score = result.score,
                    pairs = result.pairs_found,
                    clicks = result.total_clicks,
                    seconds = result.elapsed_secs,
                    "Round result recorded"
                );
                ResultEvent::Recorded {
                    player: self.player.clone(),
                    result,
                }
            }
            Err(error) => {
                warn!(
                    target: "runtime::recorder",
                    player = %self.player,
                    %error,
                    "Failed to record round result"
                );
                ResultEvent::PersistFailed {
                    player: self.player.clone(),
                    result,
                    error: error.to_string(),
                }
            }
        }
    }
}
