//! Deterministic rules of a pair-matching combat round.
//!
//! `game-core` owns the board, the combatants and the round state machine.
//! It performs no I/O and never reads a clock: the runtime feeds it clicks,
//! ticks and frame times, and forwards the [`RoundEvent`]s it returns.
//! All round state mutation flows through [`RoundController`].
pub mod board;
pub mod combat;
pub mod config;
pub mod error;
pub mod round;

pub use board::{
    Board, ClampReason, EffectTag, GridLayout, LayoutCatalog, PairClamp, PairingAssignment,
    PayloadId, PayloadPool, Slot, SlotError, SlotPayload, SlotState, generate_pairing,
};
pub use combat::{AttackCharge, DamageReport, HealthMeter, Monster, Player};
pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError};
pub use round::{
    GameOverReason, GameResult, MonsterView, ResultDocument, RoundController, RoundEvent,
    RoundPhase, RoundSnapshot, RoundStats, SelectionError, SelectionOutcome, SelectionReport,
    SlotFace, SlotView, format_clock, game_over_in,
};
