//! Cross-mover agent gossip (SPEC_FULL.md §4.8).

use dt_core::{AgentId, NodeId};

/// A compact snapshot of one graph agent, published by its owning mover and
/// consumed by every mover (including itself) on the next step.
///
/// The peer table this feeds is deliberately lossy: there is no vector clock
/// or barrier, so a reader may see last step's value on contention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerSnapshot {
    pub id: AgentId,
    pub node: NodeId,
    pub influence: i32,
    pub route: Vec<NodeId>,
}
