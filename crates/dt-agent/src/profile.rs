//! Immutable per-agent profile loaded once from the person table.

use dt_core::NodeId;

/// The fixed behavioral parameters of a graph-bound agent — loaded once at
/// startup and never mutated during the run. Columns 5 and 6 of the source
/// person row are reserved/unused (SPEC_FULL.md §9 Open Question 2) and are
/// intentionally not represented here.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphAgentProfile {
    /// Distance in map units consumed per step while following a route.
    pub speed: f32,
    /// Radius (in view-offset steps, up to 10) scanned during view-based
    /// re-route checks.
    pub view_length: u32,
    /// Flood depth at which a cell in view triggers a re-route.
    pub warning_depth: f32,
    /// `flood_depth - height/100` threshold at which the agent becomes a
    /// victim.
    pub victim_depth: f32,
    /// The node this agent is ultimately trying to reach (currently
    /// informational only — the route server ignores it, see
    /// SPEC_FULL.md §4.4).
    pub target_nid: NodeId,
    /// Ticks the reroute timer is set to after a route request is
    /// published.
    pub request_timeout: i32,
    /// Ticks the reroute timer must reach zero before a new view-based
    /// re-route may be triggered.
    pub reroute_timeout: i32,
    /// Influence level 0..4 controlling follow-the-leader behavior.
    pub influence: u8,
}

impl Default for GraphAgentProfile {
    fn default() -> Self {
        Self {
            speed: 1.0,
            view_length: 0,
            warning_depth: 0.5,
            victim_depth: 0.5,
            target_nid: NodeId::INVALID,
            request_timeout: 0,
            reroute_timeout: 0,
            influence: 0,
        }
    }
}
