//! Asynchronous abstraction for sourcing tile selections.
//!
//! Runtime users plug in [`SelectionProvider`] implementations so a round can
//! be played by a human front end, a scripted bot, or a test fixture.
use async_trait::async_trait;
use game_core::{RoundSnapshot, SlotState};

use super::errors::Result;

/// Trait for choosing the next tile based on the visible round state.
///
/// Implementations see only what a player would see: covered tiles are
/// [`game_core::SlotFace::Hidden`] in the snapshot.
#[async_trait]
pub trait SelectionProvider: Send + Sync {
    /// Choose the next slot to click.
    ///
    /// # Returns
    /// `Some(index)` to click, or `None` to pass until the next poll
    async fn next_selection(&self, snapshot: &RoundSnapshot) -> Result<Option<usize>>;
}

/// Always clicks the first covered tile.
/// Useful for testing or as a fallback.
pub struct FirstCoveredProvider;

#[async_trait]
impl SelectionProvider for FirstCoveredProvider {
    async fn next_selection(&self, snapshot: &RoundSnapshot) -> Result<Option<usize>> {
        Ok(snapshot
            .slots
            .iter()
            .find(|slot| slot.state == SlotState::Covered)
            .map(|slot| slot.index))
    }
}
