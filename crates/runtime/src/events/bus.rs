//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use game_core::RoundEvent;

use super::types::ResultEvent;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Board and lifecycle changes (reveals, mismatches, game over)
    Round,
    /// Hits exchanged between player and monster
    Combat,
    /// Once-per-second clock and score updates
    Clock,
    /// Result recording after teardown
    Result,
}

impl Topic {
    pub const ALL: [Topic; 4] = [Topic::Round, Topic::Combat, Topic::Clock, Topic::Result];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Round(RoundEvent),
    Result(ResultEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Round(event) => match event {
                RoundEvent::Tick { .. } => Topic::Clock,
                RoundEvent::PairHit { .. }
                | RoundEvent::MonsterDamaged { .. }
                | RoundEvent::MonsterDefeated
                | RoundEvent::MonsterAttacked { .. }
                | RoundEvent::PlayerDamaged { .. }
                | RoundEvent::PlayerDefeated => Topic::Combat,
                RoundEvent::RoundStarted { .. }
                | RoundEvent::SlotRevealed { .. }
                | RoundEvent::Mismatch { .. }
                | RoundEvent::SlotsCovered { .. }
                | RoundEvent::GameOver { .. } => Topic::Round,
            },
            Event::Result(_) => Topic::Result,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Dropping a receiver unsubscribes it.
///
/// Every topic's channel is created up front and never replaced, so clones
/// share the map without locking.
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<Event>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let channels = Topic::ALL
            .into_iter()
            .map(|topic| (topic, broadcast::channel(capacity).0))
            .collect();

        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish an event to its corresponding topic
    ///
    /// Fire-and-forget: an event nobody listens to is dropped.
    pub fn publish(&self, event: Event) {
        let topic = event.topic();

        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    fn sender(&self, topic: Topic) -> broadcast::Sender<Event> {
        match self.channels.get(&topic) {
            Some(tx) => tx.clone(),
            // Unreachable with the constructors above; a detached channel
            // simply never yields.
            None => broadcast::channel(1).0,
        }
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
