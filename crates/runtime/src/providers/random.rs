//! Random-clicking bot.

use std::sync::Mutex;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use game_core::{RoundPhase, RoundSnapshot, SlotState};

use crate::api::{Result, RuntimeError, SelectionProvider};

/// Clicks a uniformly random covered tile.
pub struct RandomBot {
    rng: Mutex<StdRng>,
}

impl RandomBot {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

#[async_trait]
impl SelectionProvider for RandomBot {
    async fn next_selection(&self, snapshot: &RoundSnapshot) -> Result<Option<usize>> {
        if matches!(snapshot.phase, RoundPhase::Resolving | RoundPhase::GameOver) {
            return Ok(None);
        }

        let covered: Vec<usize> = snapshot
            .slots
            .iter()
            .filter(|slot| slot.state == SlotState::Covered)
            .map(|slot| slot.index)
            .collect();

        let mut rng = self
            .rng
            .lock()
            .map_err(|_| RuntimeError::Provider("random bot lock poisoned".into()))?;
        Ok(covered.choose(&mut *rng).copied())
    }
}
