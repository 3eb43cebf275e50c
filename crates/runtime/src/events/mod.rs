//! Topic-based event bus for runtime events.
//!
//! Round events are published to specific topics, and consumers can
//! subscribe only to the topics they need (a HUD wants `Clock` and `Combat`,
//! a VFX layer only `Combat`).

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::ResultEvent;
