//! Route requests published by the view-based re-route check.

use dt_core::{AgentId, NodeId};

/// A request for the route server to compute a path, published on the
/// per-agent route topic (SPEC_FULL.md §4.5.d, §4.8 table).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequest {
    pub agent: AgentId,
    pub start_nid: NodeId,
    pub target_nid: NodeId,
}
