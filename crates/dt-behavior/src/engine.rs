//! `GraphMoverEngine` — the one real [`BehaviorModel`] implementation,
//! driving every owned agent through SPEC_FULL.md §4.5's per-step sequence.

use dt_agent::GraphAgentStore;
use dt_core::AgentId;

use crate::bfs::bounded_influence_bfs_with_radius;
use crate::cascade::update_agent;
use crate::context::StepContext;
use crate::error::BehaviorResult;
use crate::model::BehaviorModel;
use crate::peer::PeerSnapshot;
use crate::request::RouteRequest;

/// What one step produces for the caller (dt-sim) to publish.
#[derive(Debug, Default)]
pub struct StepOutput {
    /// Route requests to publish on the per-agent route topic.
    pub route_requests: Vec<RouteRequest>,
    /// The compact gossip snapshot for every owned agent, to publish on the
    /// intra-mover topic (SPEC_FULL.md §4.8).
    pub gossip: Vec<PeerSnapshot>,
}

/// Drives one Graph Mover's slice of agents through a single step.
///
/// `base_agent_id` is the first global agent id in this mover's assigned
/// range (SPEC_FULL.md §4.5: "holds its slice of graph agents, the range
/// assigned at registration") — local store index `i` corresponds to global
/// id `base_agent_id + i`.
pub struct GraphMoverEngine {
    base_agent_id: AgentId,
}

impl GraphMoverEngine {
    pub fn new(base_agent_id: AgentId) -> Self {
        Self { base_agent_id }
    }

    #[inline]
    fn global_id(&self, local: usize) -> AgentId {
        AgentId(self.base_agent_id.0 + local as u32)
    }
}

impl BehaviorModel for GraphMoverEngine {
    fn step(&self, store: &mut GraphAgentStore, ctx: &StepContext<'_>) -> BehaviorResult<StepOutput> {
        let mut route_requests = Vec::new();
        let mut gossip = Vec::with_capacity(store.count);

        if ctx.step == ctx.announce_step {
            for flag in store.announced.iter_mut() {
                *flag = true;
            }
        }

        for i in 0..store.count {
            if store.status[i].is_terminal() {
                continue;
            }

            let bfs = bounded_influence_bfs_with_radius(
                ctx.network,
                ctx.topology,
                store.node_id[i],
                ctx.influence_radius_sq,
            );
            if bfs.overflowed {
                tracing::warn!(agent = i, "influence BFS task buffer overflowed");
            }
            store.route_to_top[i] = bfs.route_to_top;
            store.route_to_leader[i] = bfs.route_to_leader;

            let global_id = self.global_id(i);
            if let Some(request) = update_agent(i, global_id, store, ctx)? {
                route_requests.push(request);
            }
        }

        for i in 0..store.count {
            gossip.push(PeerSnapshot {
                id: self.global_id(i),
                node: store.node_id[i],
                influence: store.profile[i].influence as i32,
                route: store.route[i].clone(),
            });
        }

        Ok(StepOutput { route_requests, gossip })
    }
}
