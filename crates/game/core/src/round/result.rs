//! Final record of a finished round.

use super::stats::RoundStats;

/// Snapshot of the stats taken at teardown.
///
/// Serialized field names follow the shipped result files
/// (`total_clicks`, `total_time`, `pairs`, `score`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameResult {
    pub total_clicks: u32,
    #[cfg_attr(feature = "serde", serde(rename = "total_time"))]
    pub elapsed_secs: u64,
    #[cfg_attr(feature = "serde", serde(rename = "pairs"))]
    pub pairs_found: u32,
    pub score: u32,
}

impl From<&RoundStats> for GameResult {
    fn from(stats: &RoundStats) -> Self {
        Self {
            total_clicks: stats.total_clicks,
            elapsed_secs: stats.elapsed_secs,
            pairs_found: stats.pairs_found,
            score: stats.score(),
        }
    }
}

/// On-disk envelope: `{"results": {...}}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultDocument {
    pub results: GameResult,
}

impl From<GameResult> for ResultDocument {
    fn from(results: GameResult) -> Self {
        Self { results }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn document_uses_result_file_field_names() {
        let stats = RoundStats {
            total_clicks: 10,
            pairs_found: 3,
            elapsed_secs: 15,
        };
        let document = ResultDocument::from(GameResult::from(&stats));
        let json = serde_json::to_value(document).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "results": {
                    "total_clicks": 10,
                    "total_time": 15,
                    "pairs": 3,
                    "score": 265
                }
            })
        );
    }

    #[test]
    fn document_parses_shipped_format() {
        let raw = r#"{"results":{"total_clicks":22,"total_time":41,"pairs":4,"score":315}}"#;
        let document: ResultDocument = serde_json::from_str(raw).unwrap();
        assert_eq!(document.results.score, 315);
        assert_eq!(document.results.elapsed_secs, 41);
    }
}
