//! Repository layer for finished-round results.
//!
//! Results are the only data that outlives a round:
//! - One result record per player (last round wins)
//! - Read back in bulk to build the leaderboard
//!
//! Round content (payloads, layouts, config) is loaded by `game-content`,
//! not by repositories.

mod error;
mod file;
mod memory;
mod traits;

pub use error::RepositoryError;
pub use file::{FileResultRepository, default_results_dir};
pub use memory::InMemoryResultRepo;
pub use traits::{PlayerResult, ResultRepository};
