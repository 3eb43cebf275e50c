//! One round: selection handling, combat resolution, clock and score.

mod controller;
mod events;
mod result;
mod stats;

pub use controller::{
    MonsterView, RoundController, RoundPhase, RoundSnapshot, SelectionError, SelectionOutcome,
    SelectionReport, SlotFace, SlotView,
};
pub use events::{GameOverReason, RoundEvent, game_over_in};
pub use result::{GameResult, ResultDocument};
pub use stats::{RoundStats, format_clock};
