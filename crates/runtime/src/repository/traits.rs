//! Repository contracts for finished-round results.

use game_core::GameResult;

use super::error::Result;

/// A stored result together with the player it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerResult {
    pub player: String,
    pub result: GameResult,
}

/// Repository for per-player round results.
///
/// One record per player: saving again overwrites the previous result.
pub trait ResultRepository: Send + Sync {
    /// Save the result of `player`'s latest round.
    fn save(&self, player: &str, result: &GameResult) -> Result<()>;

    /// Load the stored result of `player`.
    fn load(&self, player: &str) -> Result<Option<GameResult>>;

    /// List every readable result.
    ///
    /// Unreadable entries are skipped, not reported as errors.
    fn list(&self) -> Result<Vec<PlayerResult>>;
}

/// Rejects names that cannot be embedded in a file name.
pub(crate) fn validate_player_name(name: &str) -> Result<()> {
    let reason = if name.trim().is_empty() {
        "name is empty"
    } else if name.contains(['/', '\\']) || name == "." || name == ".." {
        "name must not contain path separators"
    } else {
        return Ok(());
    };

    Err(super::RepositoryError::InvalidPlayerName {
        name: name.to_string(),
        reason,
    })
}
