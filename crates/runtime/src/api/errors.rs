//! Unified error types surfaced by the runtime API.
//!
//! Invalid commands are not errors: the worker reports them as
//! [`slot_core::CommandOutcome::Ignored`]. Only plumbing failures and bad
//! configuration end up here.
use thiserror::Error;
use tokio::sync::oneshot;

use slot_core::ConfigError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("machine worker command channel closed")]
    CommandChannelClosed,

    #[error("machine worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("machine worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("invalid machine configuration")]
    InvalidConfig(#[from] ConfigError),
}
