//! Pair assignment and shuffling.
//!
//! A round's tiles are produced in two steps: build the multiset where every
//! used payload appears exactly twice (padded with empty fillers), then
//! permute it uniformly at random.

use rand::Rng;
use rand::seq::SliceRandom;

use super::payload::PayloadId;

/// Why the requested pair count could not be honoured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClampReason {
    /// The grid has fewer than `2 * requested` slots.
    GridTooSmall,
    /// The payload pool holds fewer distinct payloads than requested.
    PoolTooSmall,
}

/// Diagnostic describing a per-round clamp of the pair count.
///
/// The clamp never fails the round and is never written back into
/// configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairClamp {
    pub requested: usize,
    pub effective: usize,
    pub reason: ClampReason,
}

/// Shuffled slot contents for one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairingAssignment {
    /// One entry per slot; `None` marks a filler tile.
    pub entries: Vec<Option<PayloadId>>,
    /// Pair count actually placed on the board.
    pub effective_pairs: usize,
    /// Present when `effective_pairs` is lower than what was requested.
    pub clamp: Option<PairClamp>,
}

impl PairingAssignment {
    /// Number of non-filler entries. Always `2 * effective_pairs`.
    pub fn filled(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }
}

/// Builds and shuffles the slot contents for a round.
///
/// `effective_pairs = min(requested_pairs, total_slots / 2, pool_len)`.
/// Payloads `0..effective_pairs` are each placed twice, the rest of the grid
/// is filled with `None`, and the whole list is permuted with Fisher–Yates
/// (every arrangement equally likely).
pub fn generate_pairing<R>(
    total_slots: usize,
    requested_pairs: usize,
    pool_len: usize,
    rng: &mut R,
) -> PairingAssignment
where
    R: Rng + ?Sized,
{
    let grid_limit = total_slots / 2;
    let effective_pairs = requested_pairs.min(grid_limit).min(pool_len);

    let clamp = (effective_pairs < requested_pairs).then(|| PairClamp {
        requested: requested_pairs,
        effective: effective_pairs,
        reason: if grid_limit <= pool_len {
            ClampReason::GridTooSmall
        } else {
            ClampReason::PoolTooSmall
        },
    });

    let mut entries = Vec::with_capacity(total_slots);
    for index in 0..effective_pairs {
        let id = PayloadId(index as u32);
        entries.push(Some(id));
        entries.push(Some(id));
    }
    entries.resize(total_slots, None);

    // rand's shuffle walks from the last index down, swapping with a uniform
    // index in [0, i].
    entries.shuffle(rng);

    PairingAssignment {
        entries,
        effective_pairs,
        clamp,
    }
}
