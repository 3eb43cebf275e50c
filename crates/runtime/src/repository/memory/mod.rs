//! In-memory repository implementations for tests and ephemeral sessions.

mod results;

pub use results::InMemoryResultRepo;
