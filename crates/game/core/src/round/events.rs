//! Facts emitted by the round controller.
//!
//! The controller returns these from every mutating call; the runtime
//! forwards them to subscribers (HUD, VFX, audio). Nothing in the rules reads
//! them back.

use crate::board::{GridLayout, PairClamp, PayloadId, SlotPayload};

/// Why a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameOverReason {
    AllPairsFound,
    PlayerDefeated,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundEvent {
    RoundStarted {
        layout: GridLayout,
        effective_pairs: usize,
        clamp: Option<PairClamp>,
        monster_name: String,
        monster_health: u32,
        player_health: u32,
    },

    SlotRevealed {
        index: usize,
        payload: Option<PayloadId>,
    },

    /// Two tiles matched; carries the payload so renderers can pick the VFX.
    PairHit {
        first: usize,
        second: usize,
        payload: SlotPayload,
    },

    /// Two tiles differ; they stay face up until the reveal delay elapses.
    Mismatch {
        first: usize,
        second: usize,
    },

    /// The mismatched tiles were turned face down again.
    SlotsCovered {
        first: usize,
        second: usize,
    },

    MonsterDamaged {
        amount: u32,
        remaining: u32,
    },

    MonsterDefeated,

    /// The monster finished charging and swung at the player.
    MonsterAttacked {
        damage: u32,
    },

    PlayerDamaged {
        amount: u32,
        remaining: u32,
    },

    PlayerDefeated,

    GameOver {
        reason: GameOverReason,
    },

    Tick {
        elapsed_secs: u64,
        clock: String,
        score: u32,
    },
}

impl RoundEvent {
    /// Returns the reason if this is the game-over event.
    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        match self {
            Self::GameOver { reason } => Some(*reason),
            _ => None,
        }
    }

    /// Short snake_case name, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RoundStarted { .. } => "round_started",
            Self::SlotRevealed { .. } => "slot_revealed",
            Self::PairHit { .. } => "pair_hit",
            Self::Mismatch { .. } => "mismatch",
            Self::SlotsCovered { .. } => "slots_covered",
            Self::MonsterDamaged { .. } => "monster_damaged",
            Self::MonsterDefeated => "monster_defeated",
            Self::MonsterAttacked { .. } => "monster_attacked",
            Self::PlayerDamaged { .. } => "player_damaged",
            Self::PlayerDefeated => "player_defeated",
            Self::GameOver { .. } => "game_over",
            Self::Tick { .. } => "tick",
        }
    }
}

/// Finds the game-over event in a batch, if the batch ended the round.
pub fn game_over_in(events: &[RoundEvent]) -> Option<GameOverReason> {
    events.iter().find_map(RoundEvent::game_over_reason)
}
