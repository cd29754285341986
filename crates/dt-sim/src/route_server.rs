//! The Route Server (SPEC_FULL.md §4.4), wired to the bus's route-request
//! topic.
//!
//! The BFS itself already lives in `dt_spatial::FloodAwareBfsRouter`; this
//! module only owns the network + router pair and translates between wire
//! payloads and `Router` calls.

use dt_bus::payload::{RouteReplyEntity, RouteRequestEntity};
use dt_core::NodeId;
use dt_spatial::{FloodAwareBfsRouter, FloodGrid, RoadNetwork, Router};

/// Recomputes its next-hop field once per cycle and answers route requests
/// in between without re-running the BFS (SPEC_FULL.md §4.4).
pub struct RouteServer {
    network: RoadNetwork,
    router: FloodAwareBfsRouter,
}

impl RouteServer {
    pub fn new(network: RoadNetwork) -> Self {
        Self {
            network,
            router: FloodAwareBfsRouter::new(),
        }
    }

    pub fn network(&self) -> &RoadNetwork {
        &self.network
    }

    /// Recompute reachability against the current step's flood grid. Must
    /// be called once per step before `handle_request`.
    pub fn recompute(&mut self, flood: &FloodGrid) {
        self.router.recompute(&self.network, flood);
    }

    /// Answer a single route request. Declines (empty reply) when no
    /// shelter is reachable from `start_nid`; `target_nid` is accepted as
    /// part of the request's identity but never consulted by the walk,
    /// matching the original reference behavior (SPEC_FULL.md §4.4 "Note on
    /// target_nid").
    pub fn handle_request(&self, request: &RouteRequestEntity) -> RouteReplyEntity {
        let from = NodeId(request.start_nid);
        let to = NodeId(request.target_nid);
        match self.router.route(&self.network, from, to) {
            Ok(route) => route.nodes.iter().map(|n| n.0.to_string()).collect(),
            Err(_) => Vec::new(),
        }
    }
}
