//! File-based ResultRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::{GameResult, ResultDocument};

use crate::repository::error::Result;
use crate::repository::traits::validate_player_name;
use crate::repository::{PlayerResult, RepositoryError, ResultRepository};

const FILE_PREFIX: &str = "RESULTS";
const FILE_SUFFIX: &str = ".json";

/// Platform data directory for result files.
///
/// - Linux: `~/.local/share/pairstrike/results`
/// - macOS: `~/Library/Application Support/pairstrike/results`
/// - Windows: `%APPDATA%\pairstrike\results`
/// - Fallback: `./results`
pub fn default_results_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "pairstrike")
        .map(|dirs| dirs.data_dir().join("results"))
        .unwrap_or_else(|| PathBuf::from("./results"))
}

/// Stores one JSON document per player.
///
/// # File Format
///
/// `RESULTS{player}.json` containing
/// `{"results": {"total_clicks": .., "total_time": .., "pairs": .., "score": ..}}`.
pub struct FileResultRepository {
    base_dir: PathBuf,
}

impl FileResultRepository {
    /// Create a new file-based result repository, creating the directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a player's result file.
    pub fn result_path(&self, player: &str) -> PathBuf {
        self.base_dir.join(format!("{FILE_PREFIX}{player}{FILE_SUFFIX}"))
    }

    fn read_document(path: &Path) -> Result<GameResult> {
        let content = fs::read_to_string(path).map_err(RepositoryError::Io)?;
        let document: ResultDocument =
            serde_json::from_str(&content).map_err(|e| RepositoryError::Json(e.to_string()))?;
        Ok(document.results)
    }
}

impl ResultRepository for FileResultRepository {
    fn save(&self, player: &str, result: &GameResult) -> Result<()> {
        validate_player_name(player)?;

        let path = self.result_path(player);
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(&ResultDocument::from(*result))
            .map_err(|e| RepositoryError::Json(e.to_string()))?;

        // Write to temp file
        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved result for {} to {}", player, path.display());

        Ok(())
    }

    fn load(&self, player: &str) -> Result<Option<GameResult>> {
        validate_player_name(player)?;

        let path = self.result_path(player);
        if !path.exists() {
            return Ok(None);
        }

        Self::read_document(&path).map(Some)
    }

    fn list(&self) -> Result<Vec<PlayerResult>> {
        let mut results = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            let Some(player) = path
                .file_name()
                .and_then(|s| s.to_str())
                .and_then(|name| name.strip_prefix(FILE_PREFIX))
                .and_then(|name| name.strip_suffix(FILE_SUFFIX))
            else {
                continue;
            };

            match Self::read_document(&path) {
                Ok(result) => results.push(PlayerResult {
                    player: player.to_string(),
                    result,
                }),
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        %error,
                        "Skipping unreadable result file"
                    );
                }
            }
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn result(score: u32) -> GameResult {
        GameResult {
            total_clicks: 12,
            elapsed_secs: 30,
            pairs_found: 4,
            score,
        }
    }

    #[test]
    fn save_writes_results_envelope() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileResultRepository::new(temp_dir.path()).unwrap();

        repo.save("Alice", &result(346)).unwrap();

        let path = temp_dir.path().join("RESULTSAlice.json");
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["results"]["total_time"], 30);
        assert_eq!(json["results"]["pairs"], 4);
        assert_eq!(json["results"]["score"], 346);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn save_overwrites_previous_result() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileResultRepository::new(temp_dir.path()).unwrap();

        repo.save("Bob", &result(100)).unwrap();
        repo.save("Bob", &result(250)).unwrap();

        assert_eq!(repo.load("Bob").unwrap(), Some(result(250)));
        assert_eq!(repo.load("Carol").unwrap(), None);
    }

    #[test]
    fn list_skips_malformed_and_foreign_files() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileResultRepository::new(temp_dir.path()).unwrap();

        repo.save("Alice", &result(300)).unwrap();
        fs::write(temp_dir.path().join("RESULTSBroken.json"), "{not json").unwrap();
        fs::write(temp_dir.path().join("RESULTSEmpty.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "hello").unwrap();

        let listed = repo.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].player, "Alice");
    }

    #[test]
    fn path_like_names_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileResultRepository::new(temp_dir.path()).unwrap();

        assert!(matches!(
            repo.save("../evil", &result(1)),
            Err(RepositoryError::InvalidPlayerName { .. })
        ));
        assert!(repo.save("  ", &result(1)).is_err());
    }
}
