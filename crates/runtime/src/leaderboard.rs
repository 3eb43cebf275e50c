//! Ranking of stored results.

use game_core::GameResult;
use serde::{Deserialize, Serialize};

use crate::repository::{PlayerResult, RepositoryError, ResultRepository};

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position.
    pub rank: usize,
    pub player: String,
    pub score: u32,
    pub result: GameResult,
}

/// Top results, best score first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub const DEFAULT_SIZE: usize = 6;

    /// Ranks `results` by score (descending) and keeps the first `limit`.
    ///
    /// Equal scores are ordered by player name so the ranking is stable
    /// regardless of directory iteration order.
    pub fn rank(mut results: Vec<PlayerResult>, limit: usize) -> Self {
        results.sort_by(|a, b| {
            b.result
                .score
                .cmp(&a.result.score)
                .then_with(|| a.player.cmp(&b.player))
        });

        let entries = results
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(position, PlayerResult { player, result })| LeaderboardEntry {
                rank: position + 1,
                player,
                score: result.score,
                result,
            })
            .collect();

        Self { entries }
    }

    /// Reads every stored result and ranks it.
    pub fn load(
        repository: &dyn ResultRepository,
        limit: usize,
    ) -> Result<Self, RepositoryError> {
        let results = repository.list()?;
        tracing::debug!(count = results.len(), limit, "Building leaderboard");
        Ok(Self::rank(results, limit))
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryResultRepo;

    fn scored(player: &str, score: u32) -> PlayerResult {
        PlayerResult {
            player: player.to_string(),
            result: GameResult {
                score,
                ..GameResult::default()
            },
        }
    }

    #[test]
    fn keeps_top_scores_in_descending_order() {
        let results = (0..9).map(|i| scored(&format!("p{i}"), i * 10)).collect();
        let board = Leaderboard::rank(results, Leaderboard::DEFAULT_SIZE);

        assert_eq!(board.len(), 6);
        let scores: Vec<_> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![80, 70, 60, 50, 40, 30]);
        assert_eq!(board.entries()[0].rank, 1);
        assert_eq!(board.entries()[5].rank, 6);
    }

    #[test]
    fn ties_break_by_player_name() {
        let board = Leaderboard::rank(vec![scored("zed", 5), scored("amy", 5)], 6);
        assert_eq!(board.entries()[0].player, "amy");
    }

    #[test]
    fn loads_from_repository() {
        let repo = InMemoryResultRepo::new();
        repo.save("Alice", &scored("Alice", 120).result).unwrap();
        repo.save("Bob", &scored("Bob", 300).result).unwrap();

        let board = Leaderboard::load(&repo, 1).unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(board.entries()[0].player, "Bob");
    }

    #[test]
    fn empty_repository_gives_empty_board() {
        let board = Leaderboard::load(&InMemoryResultRepo::new(), 6).unwrap();
        assert!(board.is_empty());
    }
}
