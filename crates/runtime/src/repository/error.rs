//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("result repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("invalid player name {name:?}: {reason}")]
    InvalidPlayerName { name: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
