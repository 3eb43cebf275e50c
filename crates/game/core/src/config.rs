//! Round configuration constants and tunable parameters.

use core::time::Duration;

use crate::board::GridLayout;

/// Game configuration for one round.
///
/// Timing that belongs to the async shell (tick interval, reveal delay,
/// game-over delay) lives in the runtime configuration; only values that
/// shape the rules are kept here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Grid size and requested pair count.
    pub layout: GridLayout,
    /// Player health at round start.
    pub player_max_health: u32,
    /// Display name of the monster.
    pub monster_name: String,
    /// Damage dealt to the player by each monster attack.
    pub monster_damage: u32,
    /// Time the monster needs to charge one attack, in milliseconds.
    pub monster_attack_period_ms: u64,
}

impl GameConfig {
    // ===== rule constants =====
    pub const MIN_GRID_SIDE: u32 = 2;
    pub const MAX_GRID_SIDE: u32 = 8;
    pub const MIN_PAIRS: u32 = 1;
    pub const MAX_PAIRS: u32 = 10;
    pub const MIN_PLAYER_HEALTH: u32 = 1;
    pub const MAX_PLAYER_HEALTH: u32 = 10;
    pub const MIN_ATTACK_PERIOD_MS: u64 = 1_000;
    pub const MAX_ATTACK_PERIOD_MS: u64 = 30_000;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ROWS: u32 = 4;
    pub const DEFAULT_COLUMNS: u32 = 3;
    pub const DEFAULT_PAIRS: u32 = 4;
    pub const DEFAULT_PLAYER_HEALTH: u32 = 10;
    pub const DEFAULT_MONSTER_NAME: &'static str = "EVIL Monster";
    pub const DEFAULT_MONSTER_DAMAGE: u32 = 2;
    pub const DEFAULT_ATTACK_PERIOD_MS: u64 = 5_000;

    pub fn new() -> Self {
        Self {
            layout: GridLayout::new(Self::DEFAULT_ROWS, Self::DEFAULT_COLUMNS, Self::DEFAULT_PAIRS),
            player_max_health: Self::DEFAULT_PLAYER_HEALTH,
            monster_name: Self::DEFAULT_MONSTER_NAME.to_string(),
            monster_damage: Self::DEFAULT_MONSTER_DAMAGE,
            monster_attack_period_ms: Self::DEFAULT_ATTACK_PERIOD_MS,
        }
    }

    pub fn with_layout(mut self, layout: GridLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_player_max_health(mut self, health: u32) -> Self {
        self.player_max_health = health;
        self
    }

    pub fn with_monster(mut self, damage: u32, attack_period: Duration) -> Self {
        self.monster_damage = damage;
        self.monster_attack_period_ms = attack_period.as_millis() as u64;
        self
    }

    /// Returns a copy with every tunable clamped into its supported range.
    ///
    /// Values loaded from content files go through here before a round is
    /// built, so a hand-edited file can never produce a degenerate round.
    pub fn normalized(&self) -> Self {
        Self {
            layout: self.layout.clamped(),
            player_max_health: self
                .player_max_health
                .clamp(Self::MIN_PLAYER_HEALTH, Self::MAX_PLAYER_HEALTH),
            monster_name: self.monster_name.clone(),
            monster_damage: self.monster_damage,
            monster_attack_period_ms: self
                .monster_attack_period_ms
                .clamp(Self::MIN_ATTACK_PERIOD_MS, Self::MAX_ATTACK_PERIOD_MS),
        }
    }

    pub fn monster_attack_period(&self) -> Duration {
        Duration::from_millis(self.monster_attack_period_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
