//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, repositories, and selection
//! providers so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{GameError, SelectionError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("selection provider not set")]
    ProviderNotSet,

    #[error("selection provider failed: {0}")]
    Provider(String),

    #[error("round worker command channel closed")]
    CommandChannelClosed,

    #[error("round worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("round torn down without a result")]
    ResultUnavailable,

    #[error("round worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("selection rejected: {0}")]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    /// True for a rejected click that play can simply continue after.
    pub fn is_rejected_selection(&self) -> bool {
        matches!(self, Self::Selection(error) if error.severity().is_recoverable())
    }
}
