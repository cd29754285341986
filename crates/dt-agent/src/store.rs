//! Core agent storage: `GraphAgentStore` (SoA data) and `AgentRngs`
//! (per-agent RNG).
//!
//! # Why two structs?
//!
//! The parallel per-agent cascade (SPEC_FULL.md §4.5.d) needs `&mut AgentRngs`
//! (exclusive mutable access to each agent's RNG, used for media-acquisition
//! draws) and `&GraphAgentStore` (shared read access to world state)
//! simultaneously. Rust's borrow checker forbids this if both live inside a
//! single struct. Keeping RNGs in a separate `AgentRngs` struct resolves the
//! conflict cleanly, exactly as the teacher framework's `AgentStore`/
//! `AgentRngs` split does.

use dt_core::{AgentId, AgentRng, NodeId};

use crate::component::ComponentMap;
use crate::profile::GraphAgentProfile;
use crate::status::GraphStatus;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`GraphAgentStore`] to
/// enable simultaneous `&mut AgentRngs` + `&GraphAgentStore` borrows.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Return mutable references to the RNGs for a set of agents.
    ///
    /// # Precondition (enforced by caller)
    ///
    /// `agents` must contain no duplicate `AgentId`s and all indices must be
    /// in-bounds.
    pub fn get_many_mut(&mut self, agents: &[AgentId]) -> Vec<&mut AgentRng> {
        let ptr = self.inner.as_mut_ptr();
        // SAFETY: every `AgentId` in `agents` is unique (caller invariant) and
        // within bounds, so each pointer aliases a distinct element.
        agents
            .iter()
            .map(|a| unsafe { &mut *ptr.add(a.index()) })
            .collect()
    }
}

// ── GraphAgentStore ───────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for every graph-bound (road network) agent.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is
/// the index into all of them. `route`/`route_to_leader`/`route_to_top` are
/// the one heap-allocating exception (each agent's route is a short
/// variable-length node-id sequence) — everything else is a flat scalar
/// array for cache-friendly per-step scans.
pub struct GraphAgentStore {
    /// Number of agents. Equal to the length of every SoA `Vec`.
    pub count: usize,

    pub node_id: Vec<NodeId>,
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    /// Fractional progress along the edge toward `route[0]`, in `[0.0, 1.0)`.
    pub edge_progress: Vec<f32>,

    /// The agent's current plan: an ordered sequence of node ids, the route
    /// server's reply to the agent's last request (or a leader's adopted
    /// route).
    pub route: Vec<Vec<NodeId>>,
    /// Derived each step from the influence BFS (SPEC_FULL.md §4.5.c): root's
    /// next hop toward the highest-`top_influence` node within radius.
    pub route_to_leader: Vec<Vec<NodeId>>,
    /// Derived each step from the influence BFS: root's next hop toward the
    /// highest-elevation node within radius.
    pub route_to_top: Vec<Vec<NodeId>>,

    pub status: Vec<GraphStatus>,
    /// `true` unless a QR-antenna event has zeroed it this step (§4.5.d).
    pub info_access: Vec<bool>,
    pub prepare_timer: Vec<i32>,
    pub reroute_timer: Vec<i32>,
    /// Set for every owned agent on the cycle's announce_step; gates the
    /// entire per-agent cascade until then.
    pub announced: Vec<bool>,
    /// Scratch flag carried across the view-reroute → high-ground-escape
    /// steps within the same tick (Open Question 4).
    pub is_re_requesting: Vec<bool>,

    /// Immutable behavioral parameters, loaded once from the person table.
    pub profile: Vec<GraphAgentProfile>,

    components: ComponentMap,
}

impl GraphAgentStore {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// `true` if `agent` is mid-edge with a non-zero progress toward the
    /// next node in its route.
    #[inline]
    pub fn is_in_transit(&self, agent: AgentId) -> bool {
        !self.route[agent.index()].is_empty() && self.edge_progress[agent.index()] > 0.0
    }

    // ── Component access ──────────────────────────────────────────────────

    pub fn component<T: Default + Send + Sync + 'static>(&self) -> Option<&[T]> {
        self.components.get::<T>()
    }

    pub fn component_mut<T: Default + Send + Sync + 'static>(&mut self) -> Option<&mut Vec<T>> {
        self.components.get_mut::<T>()
    }

    pub fn components(&self) -> &ComponentMap {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut ComponentMap {
        &mut self.components
    }

    // ── Package-private constructor used by GraphAgentStoreBuilder ────────

    pub(crate) fn new(count: usize, components: ComponentMap) -> Self {
        Self {
            count,
            node_id: vec![NodeId::INVALID; count],
            x: vec![0.0; count],
            y: vec![0.0; count],
            edge_progress: vec![0.0; count],
            route: vec![Vec::new(); count],
            route_to_leader: vec![Vec::new(); count],
            route_to_top: vec![Vec::new(); count],
            status: vec![GraphStatus::default(); count],
            info_access: vec![true; count],
            prepare_timer: vec![0; count],
            reroute_timer: vec![0; count],
            announced: vec![false; count],
            is_re_requesting: vec![false; count],
            profile: vec![GraphAgentProfile::default(); count],
            components,
        }
    }
}
