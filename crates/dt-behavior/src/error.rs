use dt_core::NodeId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("behavior configuration error: {0}")]
    Config(String),

    /// The head of an agent's route is not adjacent to its current node —
    /// a fatal integrity error per SPEC_FULL.md §4.5.d's motion step.
    #[error("route integrity violation: node {0} is not a neighbor of {1}")]
    RouteIntegrity(NodeId, NodeId),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
