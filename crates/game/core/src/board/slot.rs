//! Per-tile interaction state.

use super::payload::PayloadId;
use crate::error::{ErrorSeverity, GameError};

/// Visibility state of one tile.
///
/// ```text
/// Covered ──reveal──▶ Revealed ──lock──▶ Locked (terminal)
///    ▲                   │
///    └─────unreveal──────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SlotState {
    #[default]
    Covered,
    Revealed,
    Locked,
}

/// Illegal slot transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    #[error("slot {index} cannot be revealed while {state}")]
    NotCovered { index: usize, state: SlotState },

    #[error("slot {index} is {state}, expected revealed")]
    NotRevealed { index: usize, state: SlotState },
}

impl GameError for SlotError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // Clicking a face-up or locked tile is part of normal play.
            Self::NotCovered { .. } => ErrorSeverity::Recoverable,
            // Only the controller unreveals or locks, so this is a bug.
            Self::NotRevealed { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotCovered { .. } => "SLOT_NOT_COVERED",
            Self::NotRevealed { .. } => "SLOT_NOT_REVEALED",
        }
    }
}

/// One tile of the board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    index: usize,
    payload: Option<PayloadId>,
    state: SlotState,
}

impl Slot {
    pub fn new(index: usize, payload: Option<PayloadId>) -> Self {
        Self {
            index,
            payload,
            state: SlotState::Covered,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Payload carried by this tile; `None` for a filler tile.
    pub fn payload(&self) -> Option<PayloadId> {
        self.payload
    }

    pub fn state(&self) -> SlotState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state == SlotState::Locked
    }

    pub fn reveal(&mut self) -> Result<(), SlotError> {
        match self.state {
            SlotState::Covered => {
                self.state = SlotState::Revealed;
                Ok(())
            }
            state => Err(SlotError::NotCovered {
                index: self.index,
                state,
            }),
        }
    }

    pub fn unreveal(&mut self) -> Result<(), SlotError> {
        self.expect_revealed()?;
        self.state = SlotState::Covered;
        Ok(())
    }

    pub fn lock(&mut self) -> Result<(), SlotError> {
        self.expect_revealed()?;
        self.state = SlotState::Locked;
        Ok(())
    }

    fn expect_revealed(&self) -> Result<(), SlotError> {
        if self.state == SlotState::Revealed {
            Ok(())
        } else {
            Err(SlotError::NotRevealed {
                index: self.index,
                state: self.state,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_then_lock_is_terminal() {
        let mut slot = Slot::new(0, Some(PayloadId(2)));
        slot.reveal().unwrap();
        slot.lock().unwrap();

        assert!(slot.is_locked());
        assert_eq!(
            slot.reveal(),
            Err(SlotError::NotCovered {
                index: 0,
                state: SlotState::Locked
            })
        );
        assert!(slot.unreveal().is_err());
        assert!(slot.lock().is_err());
    }

    #[test]
    fn unreveal_rolls_back_to_covered() {
        let mut slot = Slot::new(4, None);
        slot.reveal().unwrap();
        assert_eq!(slot.state(), SlotState::Revealed);
        assert!(slot.reveal().is_err());

        slot.unreveal().unwrap();
        assert_eq!(slot.state(), SlotState::Covered);
        assert_eq!(slot.payload(), None);
    }

    #[test]
    fn covered_slot_cannot_lock_or_unreveal() {
        let mut slot = Slot::new(1, Some(PayloadId(0)));
        let error = slot.lock().unwrap_err();
        assert_eq!(error.severity(), ErrorSeverity::Internal);
        assert_eq!(slot.unreveal().unwrap_err().error_code(), "SLOT_NOT_REVEALED");
    }
}
