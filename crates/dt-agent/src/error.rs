//! Agent-storage error type.

use thiserror::Error;

use dt_core::AgentId;

/// Errors produced by `dt-agent`.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent index {0} out of bounds")]
    IndexOutOfBounds(AgentId),
}

pub type AgentResult<T> = Result<T, AgentError>;
