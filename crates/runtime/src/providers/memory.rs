//! Perfect-memory bot.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use game_core::{PayloadId, RoundPhase, RoundSnapshot, SlotFace, SlotState};

use crate::api::{Result, RuntimeError, SelectionProvider};

/// What the bot has seen of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seen {
    Empty,
    Payload(PayloadId),
}

/// Remembers every face-up tile it is shown.
///
/// Strategy, in order:
/// 1. second pick: the remembered partner of the open tile
/// 2. first pick: one half of a remembered, still covered pair
/// 3. a tile never seen
/// 4. any covered tile
#[derive(Default)]
pub struct MemoryBot {
    seen: Mutex<HashMap<usize, Seen>>,
}

impl MemoryBot {
    pub fn new() -> Self {
        Self::default()
    }

    fn choose(seen: &mut HashMap<usize, Seen>, snapshot: &RoundSnapshot) -> Option<usize> {
        for slot in &snapshot.slots {
            match slot.face {
                SlotFace::Hidden => {}
                SlotFace::Empty => {
                    seen.insert(slot.index, Seen::Empty);
                }
                SlotFace::Payload(id) => {
                    seen.insert(slot.index, Seen::Payload(id));
                }
            }
        }

        let seen: &HashMap<usize, Seen> = seen;
        let covered: Vec<usize> = snapshot
            .slots
            .iter()
            .filter(|slot| slot.state == SlotState::Covered)
            .map(|slot| slot.index)
            .collect();

        match snapshot.phase {
            RoundPhase::AwaitingSecondSelection => {
                let open = snapshot.slots.iter().find_map(|slot| match (slot.state, slot.face) {
                    (SlotState::Revealed, SlotFace::Payload(id)) => Some(id),
                    _ => None,
                });
                if let Some(id) = open
                    && let Some(partner) = covered_showing(&covered, seen, id).next()
                {
                    return Some(partner);
                }
            }
            RoundPhase::AwaitingFirstSelection => {
                let known_pair = covered.iter().copied().find(|index| {
                    matches!(
                        seen.get(index),
                        Some(Seen::Payload(id)) if covered_showing(&covered, seen, *id).count() >= 2
                    )
                });
                if known_pair.is_some() {
                    return known_pair;
                }
            }
            RoundPhase::Resolving | RoundPhase::GameOver => return None,
        }

        covered
            .iter()
            .copied()
            .find(|index| !seen.contains_key(index))
            .or_else(|| {
                covered
                    .iter()
                    .copied()
                    .find(|index| seen.get(index) != Some(&Seen::Empty))
            })
            .or_else(|| covered.first().copied())
    }
}

/// Covered tiles remembered to hold `id`.
fn covered_showing<'a>(
    covered: &'a [usize],
    seen: &'a HashMap<usize, Seen>,
    id: PayloadId,
) -> impl Iterator<Item = usize> + 'a {
    covered
        .iter()
        .copied()
        .filter(move |index| seen.get(index) == Some(&Seen::Payload(id)))
}

#[async_trait]
impl SelectionProvider for MemoryBot {
    async fn next_selection(&self, snapshot: &RoundSnapshot) -> Result<Option<usize>> {
        let mut seen = self
            .seen
            .lock()
            .map_err(|_| RuntimeError::Provider("memory bot lock poisoned".into()))?;
        Ok(Self::choose(&mut seen, snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::test_support::snapshot;

    use SlotFace::{Hidden, Payload};
    use SlotState::{Covered, Revealed};

    #[tokio::test]
    async fn finishes_a_pair_it_has_seen() {
        let bot = MemoryBot::new();

        // Tile 2 was shown during an earlier mismatch.
        let earlier = snapshot(
            RoundPhase::Resolving,
            vec![
                (Revealed, Payload(PayloadId(0))),
                (Covered, Hidden),
                (Revealed, Payload(PayloadId(1))),
                (Covered, Hidden),
            ],
        );
        assert_eq!(bot.next_selection(&earlier).await.unwrap(), None);

        // Now tile 3 is open showing payload 1; its partner is tile 2.
        let now = snapshot(
            RoundPhase::AwaitingSecondSelection,
            vec![
                (Covered, Hidden),
                (Covered, Hidden),
                (Covered, Hidden),
                (Revealed, Payload(PayloadId(1))),
            ],
        );
        assert_eq!(bot.next_selection(&now).await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn opens_known_pairs_first() {
        let bot = MemoryBot::new();
        let seen_both = snapshot(
            RoundPhase::Resolving,
            vec![
                (Covered, Hidden),
                (Revealed, Payload(PayloadId(4))),
                (Covered, Hidden),
                (Revealed, Payload(PayloadId(4))),
            ],
        );
        bot.next_selection(&seen_both).await.unwrap();

        let fresh = snapshot(
            RoundPhase::AwaitingFirstSelection,
            vec![
                (Covered, Hidden),
                (Covered, Hidden),
                (Covered, Hidden),
                (Covered, Hidden),
            ],
        );
        assert_eq!(bot.next_selection(&fresh).await.unwrap(), Some(1));
    }

    #[tokio::test]
    async fn explores_unknown_tiles() {
        let bot = MemoryBot::new();
        let board = snapshot(
            RoundPhase::AwaitingFirstSelection,
            vec![(SlotState::Locked, Payload(PayloadId(0))), (Covered, Hidden)],
        );
        assert_eq!(bot.next_selection(&board).await.unwrap(), Some(1));
    }
}
