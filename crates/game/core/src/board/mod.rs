//! Board generation: paired payload assignment, shuffling and tile state.
//!
//! The board owns its slots and the payload pool they reference. Only the
//! round controller mutates slot state once a round has started.

mod layout;
mod pairing;
mod payload;
mod slot;

pub use layout::{GridLayout, LayoutCatalog};
pub use pairing::{ClampReason, PairClamp, PairingAssignment, generate_pairing};
pub use payload::{EffectTag, PayloadId, PayloadPool, SlotPayload};
pub use slot::{Slot, SlotError, SlotState};

use rand::Rng;

/// Tiles of one round plus the payloads they point at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    slots: Vec<Slot>,
    pool: PayloadPool,
    effective_pairs: usize,
    clamp: Option<PairClamp>,
}

impl Board {
    /// Generates a freshly shuffled board for `layout`.
    pub fn generate<R>(layout: GridLayout, pool: PayloadPool, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let assignment = generate_pairing(
            layout.total_slots(),
            layout.pairs as usize,
            pool.len(),
            rng,
        );
        Self::from_assignment(pool, assignment)
    }

    /// Builds a board from an already computed assignment.
    pub fn from_assignment(pool: PayloadPool, assignment: PairingAssignment) -> Self {
        let slots = assignment
            .entries
            .into_iter()
            .enumerate()
            .map(|(index, payload)| Slot::new(index, payload))
            .collect();

        Self {
            slots,
            pool,
            effective_pairs: assignment.effective_pairs,
            clamp: assignment.clamp,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Pair count the round must find to finish.
    pub fn effective_pairs(&self) -> usize {
        self.effective_pairs
    }

    /// Clamp applied while generating this board, if any.
    pub fn clamp(&self) -> Option<PairClamp> {
        self.clamp
    }

    pub fn pool(&self) -> &PayloadPool {
        &self.pool
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    /// Resolves the payload data of the tile at `index`.
    pub fn payload_at(&self, index: usize) -> Option<&SlotPayload> {
        self.slot(index)
            .and_then(Slot::payload)
            .and_then(|id| self.pool.get(id))
    }

    /// Monster health budget for this board.
    ///
    /// Sums the damage of every non-empty tile and halves it: both tiles of a
    /// pair carry the payload, but a match strikes only once. A player who
    /// finds every pair deals exactly this much damage.
    pub fn total_damage(&self) -> u32 {
        let sum: u64 = self
            .slots
            .iter()
            .filter_map(Slot::payload)
            .filter_map(|id| self.pool.get(id))
            .map(|payload| u64::from(payload.damage))
            .sum();
        u32::try_from(sum / 2).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn unit_pool(len: usize) -> PayloadPool {
        (0..len)
            .map(|i| SlotPayload::new(format!("p{i}"), 1, EffectTag::Hit))
            .collect()
    }

    #[test]
    fn generate_uses_layout_and_pool() {
        let mut rng = StdRng::seed_from_u64(11);
        let board = Board::generate(GridLayout::new(4, 3, 4), unit_pool(12), &mut rng);

        assert_eq!(board.len(), 12);
        assert_eq!(board.effective_pairs(), 4);
        assert_eq!(board.clamp(), None);
        assert_eq!(board.slots().iter().filter(|s| s.payload().is_none()).count(), 4);
    }

    #[test]
    fn total_damage_counts_each_pair_once() {
        let mut rng = StdRng::seed_from_u64(5);
        let board = Board::generate(GridLayout::new(4, 3, 4), unit_pool(12), &mut rng);
        assert_eq!(board.total_damage(), 4);

        let pool = PayloadPool::new(vec![
            SlotPayload::new("a", 3, EffectTag::None),
            SlotPayload::new("b", 5, EffectTag::None),
        ]);
        let board = Board::generate(GridLayout::new(2, 3, 2), pool, &mut rng);
        assert_eq!(board.total_damage(), 8);
    }

    #[test]
    fn empty_pool_produces_filler_only_board() {
        let mut rng = StdRng::seed_from_u64(5);
        let board = Board::generate(GridLayout::new(2, 2, 2), PayloadPool::default(), &mut rng);
        assert_eq!(board.effective_pairs(), 0);
        assert_eq!(board.total_damage(), 0);
        assert_eq!(
            board.clamp().map(|c| c.reason),
            Some(ClampReason::PoolTooSmall)
        );
    }
}
