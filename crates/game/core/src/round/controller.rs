//! The round state machine.
//!
//! ```text
//! AwaitingFirstSelection ─▶ AwaitingSecondSelection ─▶ Resolving
//!          ▲                                               │
//!          └───────────────── (match / mismatch) ──────────┤
//!                                                          ▼
//!                                                      GameOver
//! ```
//!
//! The controller is synchronous. Time enters only through [`RoundController::tick`]
//! and [`RoundController::monster_charge`], and the mismatch reveal delay is
//! the caller's job: a mismatch leaves the round in `Resolving` until
//! [`RoundController::finish_mismatch`] is called.

use core::mem;
use core::time::Duration;

use rand::Rng;

use super::events::{GameOverReason, RoundEvent};
use super::result::GameResult;
use super::stats::RoundStats;
use crate::board::{Board, GridLayout, PayloadId, PayloadPool, SlotError, SlotState};
use crate::combat::{AttackCharge, Monster, Player};
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RoundPhase {
    AwaitingFirstSelection,
    AwaitingSecondSelection,
    Resolving,
    GameOver,
}

/// Rejected selection. The click is still counted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("slot {index} does not exist on a board of {len} slots")]
    SlotNotFound { index: usize, len: usize },

    #[error(transparent)]
    Slot(#[from] SlotError),

    #[error("a mismatch is still being shown")]
    ResolutionInProgress,

    #[error("the round is over")]
    RoundOver,
}

impl GameError for SelectionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SlotNotFound { .. } => ErrorSeverity::Validation,
            Self::Slot(error) => error.severity(),
            Self::ResolutionInProgress | Self::RoundOver => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SlotNotFound { .. } => "SLOT_NOT_FOUND",
            Self::Slot(error) => error.error_code(),
            Self::ResolutionInProgress => "RESOLUTION_IN_PROGRESS",
            Self::RoundOver => "ROUND_OVER",
        }
    }
}

/// What an accepted selection led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionOutcome {
    /// First tile of an attempt is face up.
    FirstRevealed,
    /// The two tiles matched and are locked.
    Matched,
    /// The two tiles differ; call `finish_mismatch` after the reveal delay.
    MismatchPending,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionReport {
    pub outcome: SelectionOutcome,
    pub events: Vec<RoundEvent>,
}

/// Up to two buffered selections plus the in-progress flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct SelectionBuffer {
    first: Option<usize>,
    second: Option<usize>,
    resolving: bool,
}

/// What a viewer may see of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotFace {
    /// Face down; contents unknown.
    Hidden,
    /// Face up filler tile.
    Empty,
    /// Face up tile showing its payload.
    Payload(PayloadId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotView {
    pub index: usize,
    pub state: SlotState,
    pub face: SlotFace,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterView {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub charge_progress: f32,
    pub active: bool,
}

/// Read-only picture of a round, safe to hand to any viewer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundSnapshot {
    pub phase: RoundPhase,
    pub layout: GridLayout,
    pub effective_pairs: usize,
    pub slots: Vec<SlotView>,
    pub stats: RoundStats,
    pub clock: String,
    pub score: u32,
    pub player_health: u32,
    pub player_max_health: u32,
    pub monster: MonsterView,
    pub game_over: Option<GameOverReason>,
    pub torn_down: bool,
    /// Final record, present once the round is torn down.
    pub result: Option<GameResult>,
}

/// Owns every piece of round state and applies the rules to it.
#[derive(Clone, Debug)]
pub struct RoundController {
    layout: GridLayout,
    board: Board,
    player: Player,
    monster: Monster,
    stats: RoundStats,
    buffer: SelectionBuffer,
    game_over: Option<GameOverReason>,
    torn_down: bool,
    final_result: Option<GameResult>,
}

impl RoundController {
    /// Builds a round on an existing board.
    ///
    /// The monster's health is the board's total damage, so finding every
    /// pair is exactly enough to defeat it.
    pub fn new(config: &GameConfig, layout: GridLayout, board: Board) -> Self {
        let monster = Monster::new(
            config.monster_name.clone(),
            board.total_damage(),
            AttackCharge::new(config.monster_attack_period(), config.monster_damage),
        );

        Self {
            layout,
            board,
            player: Player::new(config.player_max_health),
            monster,
            stats: RoundStats::default(),
            buffer: SelectionBuffer::default(),
            game_over: None,
            torn_down: false,
            final_result: None,
        }
    }

    /// Shuffles a new board for `layout` and builds a round on it.
    pub fn generate<R>(
        config: &GameConfig,
        layout: GridLayout,
        pool: PayloadPool,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + ?Sized,
    {
        let board = Board::generate(layout, pool, rng);
        Self::new(config, layout, board)
    }

    /// Event describing the freshly built round.
    pub fn started_event(&self) -> RoundEvent {
        RoundEvent::RoundStarted {
            layout: self.layout,
            effective_pairs: self.board.effective_pairs(),
            clamp: self.board.clamp(),
            monster_name: self.monster.name().to_string(),
            monster_health: self.monster.health().maximum(),
            player_health: self.player.health().maximum(),
        }
    }

    pub fn phase(&self) -> RoundPhase {
        if self.game_over.is_some() {
            RoundPhase::GameOver
        } else if self.buffer.resolving {
            RoundPhase::Resolving
        } else if self.buffer.first.is_some() {
            RoundPhase::AwaitingSecondSelection
        } else {
            RoundPhase::AwaitingFirstSelection
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn monster(&self) -> &Monster {
        &self.monster
    }

    pub fn stats(&self) -> &RoundStats {
        &self.stats
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Handles a click on slot `index`.
    ///
    /// Every call counts as a click, accepted or not.
    pub fn select_slot(&mut self, index: usize) -> Result<SelectionReport, SelectionError> {
        self.stats.total_clicks = self.stats.total_clicks.saturating_add(1);

        if self.game_over.is_some() || self.torn_down {
            return Err(SelectionError::RoundOver);
        }
        if self.buffer.resolving {
            return Err(SelectionError::ResolutionInProgress);
        }

        let len = self.board.len();
        let slot = self
            .board
            .slot_mut(index)
            .ok_or(SelectionError::SlotNotFound { index, len })?;
        slot.reveal()?;
        let revealed = RoundEvent::SlotRevealed {
            index,
            payload: slot.payload(),
        };

        let Some(first) = self.buffer.first else {
            self.buffer.first = Some(index);
            return Ok(SelectionReport {
                outcome: SelectionOutcome::FirstRevealed,
                events: vec![revealed],
            });
        };

        self.buffer.second = Some(index);
        self.buffer.resolving = true;

        let mut events = vec![revealed];
        let outcome = self.resolve(first, index, &mut events)?;
        Ok(SelectionReport { outcome, events })
    }

    fn resolve(
        &mut self,
        first: usize,
        second: usize,
        events: &mut Vec<RoundEvent>,
    ) -> Result<SelectionOutcome, SelectionError> {
        let first_payload = self.board.slot(first).and_then(|slot| slot.payload());
        let second_payload = self.board.slot(second).and_then(|slot| slot.payload());

        // Two fillers never form a pair.
        let matched = match (first_payload, second_payload) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };

        if !matched {
            events.push(RoundEvent::Mismatch { first, second });
            return Ok(SelectionOutcome::MismatchPending);
        }

        let buffer = mem::take(&mut self.buffer);
        for index in [buffer.first, buffer.second].into_iter().flatten() {
            if let Some(slot) = self.board.slot_mut(index) {
                slot.lock()?;
            }
        }

        let effective = u32::try_from(self.board.effective_pairs()).unwrap_or(u32::MAX);
        self.stats.pairs_found = (self.stats.pairs_found + 1).min(effective);

        if let Some(payload) = self.board.payload_at(first).cloned() {
            let damage = payload.damage;
            events.push(RoundEvent::PairHit {
                first,
                second,
                payload,
            });
            self.strike_monster(damage, events);
        }

        if self.stats.pairs_found >= effective {
            self.enter_game_over(GameOverReason::AllPairsFound, events);
        }

        Ok(SelectionOutcome::Matched)
    }

    fn strike_monster(&mut self, damage: u32, events: &mut Vec<RoundEvent>) {
        let report = self.monster.apply_damage(damage);
        events.push(RoundEvent::MonsterDamaged {
            amount: report.dealt,
            remaining: report.remaining,
        });
        if report.is_fatal() {
            events.push(RoundEvent::MonsterDefeated);
        }
    }

    /// Turns the two mismatched tiles face down again.
    ///
    /// The buffer and the in-progress flag are cleared before anything else,
    /// so the next selection starts fresh even if a tile fails to flip. A
    /// call with no mismatch pending does nothing.
    pub fn finish_mismatch(&mut self) -> Result<Vec<RoundEvent>, SelectionError> {
        if !self.buffer.resolving {
            return Ok(Vec::new());
        }
        let buffer = mem::take(&mut self.buffer);

        let (Some(first), Some(second)) = (buffer.first, buffer.second) else {
            return Ok(Vec::new());
        };
        for index in [first, second] {
            if let Some(slot) = self.board.slot_mut(index) {
                slot.unreveal()?;
            }
        }

        Ok(vec![RoundEvent::SlotsCovered { first, second }])
    }

    /// Advances the round clock by one second.
    ///
    /// Returns `None` once the round is torn down.
    pub fn tick(&mut self) -> Option<RoundEvent> {
        if self.torn_down {
            return None;
        }
        self.stats.elapsed_secs = self.stats.elapsed_secs.saturating_add(1);
        Some(RoundEvent::Tick {
            elapsed_secs: self.stats.elapsed_secs,
            clock: self.stats.clock(),
            score: self.stats.score(),
        })
    }

    /// Feeds one frame of elapsed time into the monster's attack timer.
    pub fn monster_charge(&mut self, elapsed: Duration) -> Vec<RoundEvent> {
        let mut events = Vec::new();
        if self.torn_down {
            return events;
        }
        let Some(damage) = self.monster.charge(elapsed) else {
            return events;
        };

        events.push(RoundEvent::MonsterAttacked { damage });
        let report = self.player.apply_damage(damage);
        events.push(RoundEvent::PlayerDamaged {
            amount: report.dealt,
            remaining: report.remaining,
        });
        if report.is_fatal() {
            events.push(RoundEvent::PlayerDefeated);
            self.enter_game_over(GameOverReason::PlayerDefeated, &mut events);
        }
        events
    }

    fn enter_game_over(&mut self, reason: GameOverReason, events: &mut Vec<RoundEvent>) {
        if self.game_over.is_some() {
            return;
        }
        self.game_over = Some(reason);
        events.push(RoundEvent::GameOver { reason });
    }

    /// Stops the round for good and returns the final record.
    ///
    /// Only the first call returns `Some`. Afterwards the monster is inactive,
    /// ticks and charges are ignored and every selection is rejected. The
    /// record stays readable through [`Self::final_result`].
    pub fn teardown(&mut self) -> Option<GameResult> {
        if self.torn_down {
            return None;
        }
        self.torn_down = true;
        self.monster.deactivate();
        let result = GameResult::from(&self.stats);
        self.final_result = Some(result);
        Some(result)
    }

    /// Record frozen at teardown.
    pub fn final_result(&self) -> Option<GameResult> {
        self.final_result
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let slots = self
            .board
            .slots()
            .iter()
            .map(|slot| SlotView {
                index: slot.index(),
                state: slot.state(),
                face: match (slot.state(), slot.payload()) {
                    (SlotState::Covered, _) => SlotFace::Hidden,
                    (_, None) => SlotFace::Empty,
                    (_, Some(id)) => SlotFace::Payload(id),
                },
            })
            .collect();

        RoundSnapshot {
            phase: self.phase(),
            layout: self.layout,
            effective_pairs: self.board.effective_pairs(),
            slots,
            stats: self.stats,
            clock: self.stats.clock(),
            score: self.stats.score(),
            player_health: self.player.health().current(),
            player_max_health: self.player.health().maximum(),
            monster: MonsterView {
                name: self.monster.name().to_string(),
                health: self.monster.health().current(),
                max_health: self.monster.health().maximum(),
                charge_progress: self.monster.charge_progress(),
                active: self.monster.is_active(),
            },
            game_over: self.game_over,
            torn_down: self.torn_down,
            result: self.final_result,
        }
    }
}
