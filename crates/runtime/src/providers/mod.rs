//! Scripted selection providers.
//!
//! Bots play a round through the same [`crate::SelectionProvider`] seam a
//! human front end would use, seeing only face-up tiles.

mod memory;
mod random;

pub use memory::MemoryBot;
pub use random::RandomBot;

use std::sync::Arc;

use crate::api::SelectionProvider;

/// Bots the runtime ships with.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BotKind {
    /// Remembers every tile it has seen and never misses a known pair.
    #[default]
    Memory,
    /// Clicks covered tiles at random.
    Random,
}

impl BotKind {
    /// Creates a provider of this kind. `seed` makes the random bot
    /// reproducible.
    pub fn build(self, seed: Option<u64>) -> Arc<dyn SelectionProvider> {
        match self {
            BotKind::Memory => Arc::new(MemoryBot::new()),
            BotKind::Random => Arc::new(RandomBot::new(seed)),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use game_core::{
        GameConfig, GridLayout, MonsterView, RoundPhase, RoundSnapshot, RoundStats, SlotFace,
        SlotState, SlotView,
    };

    /// Snapshot with the given tiles; every other field is neutral.
    pub fn snapshot(phase: RoundPhase, slots: Vec<(SlotState, SlotFace)>) -> RoundSnapshot {
        RoundSnapshot {
            phase,
            layout: GridLayout::default(),
            effective_pairs: 0,
            slots: slots
                .into_iter()
                .enumerate()
                .map(|(index, (state, face))| SlotView { index, state, face })
                .collect(),
            stats: RoundStats::default(),
            clock: "00:00".into(),
            score: 0,
            player_health: GameConfig::DEFAULT_PLAYER_HEALTH,
            player_max_health: GameConfig::DEFAULT_PLAYER_HEALTH,
            monster: MonsterView {
                name: GameConfig::DEFAULT_MONSTER_NAME.into(),
                health: 1,
                max_health: 1,
                charge_progress: 0.0,
                active: true,
            },
            game_over: None,
            torn_down: false,
            result: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn bot_kind_parses_from_env_values() {
        assert_eq!(BotKind::from_str("memory").unwrap(), BotKind::Memory);
        assert_eq!(BotKind::from_str("RANDOM").unwrap(), BotKind::Random);
        assert!(BotKind::from_str("genius").is_err());
        assert_eq!(BotKind::Random.to_string(), "random");
    }
}
