//! Event types owned by the runtime.
//!
//! Rule-level events come from [`game_core::RoundEvent`]; this module only
//! adds what happens outside the rules.

use game_core::GameResult;
use serde::{Deserialize, Serialize};

/// Outcome of recording a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultEvent {
    /// The result was stored for `player`.
    Recorded { player: String, result: GameResult },

    /// The result could not be stored. The round is over either way.
    PersistFailed {
        player: String,
        result: GameResult,
        error: String,
    },
}

impl ResultEvent {
    pub fn result(&self) -> &GameResult {
        match self {
            Self::Recorded { result, .. } | Self::PersistFailed { result, .. } => result,
        }
    }
}
