//! Runtime orchestration for a pair-matching combat round.
//!
//! This crate wires together the selection provider abstraction, round
//! content, repositories, and the round worker into a cohesive runtime API.
//! Consumers embed [`Runtime`] to play a round, subscribe to events, and
//! click tiles through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - `workers` keeps the round worker internal to the crate
//! - [`providers`] ships scripted bots
//! - [`content`], [`repository`] and [`leaderboard`] provide data adapters
pub mod api;
pub mod content;
pub mod events;
pub mod leaderboard;
pub mod providers;
pub mod repository;
pub mod runtime;

mod workers;

pub use api::{FirstCoveredProvider, Result, RuntimeError, RuntimeHandle, SelectionProvider};
pub use content::RoundContent;
pub use events::{Event, EventBus, ResultEvent, Topic};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use providers::{BotKind, MemoryBot, RandomBot};
pub use repository::{
    FileResultRepository, InMemoryResultRepo, PlayerResult, RepositoryError, ResultRepository,
    default_results_dir,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use workers::{ResultRecorder, RoundTimings};
