//! Transport-subsystem error type.

use thiserror::Error;

/// Errors produced by `dt-bus`.
#[derive(Debug, Error)]
pub enum BusError {
    #[error("no subscriber registered for topic {0:?}")]
    NoSubscriber(String),

    #[error("publish failed on topic {topic:?}: {reason}")]
    PublishFailed { topic: String, reason: String },

    #[error("subscription for {0:?} has been dropped")]
    SubscriptionClosed(String),

    #[cfg(feature = "serde")]
    #[error("payload encode/decode error: {0}")]
    Codec(#[from] serde_json::Error),
}

pub type BusResult<T> = Result<T, BusError>;
