use std::collections::HashMap;
use std::sync::RwLock;

use game_core::GameResult;

use crate::repository::error::Result;
use crate::repository::traits::validate_player_name;
use crate::repository::{PlayerResult, RepositoryError, ResultRepository};

/// In-memory implementation of ResultRepository
#[derive(Default)]
pub struct InMemoryResultRepo {
    results: RwLock<HashMap<String, GameResult>>,
}

impl InMemoryResultRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.results.read().map(|results| results.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResultRepository for InMemoryResultRepo {
    fn save(&self, player: &str, result: &GameResult) -> Result<()> {
        validate_player_name(player)?;
        let mut results = self
            .results
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        results.insert(player.to_string(), *result);
        Ok(())
    }

    fn load(&self, player: &str) -> Result<Option<GameResult>> {
        let results = self
            .results
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(results.get(player).copied())
    }

    fn list(&self) -> Result<Vec<PlayerResult>> {
        let results = self
            .results
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(results
            .iter()
            .map(|(player, result)| PlayerResult {
                player: player.clone(),
                result: *result,
            })
            .collect())
    }
}
