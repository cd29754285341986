//! Compact per-node occupancy table used by the influence BFS
//! (SPEC_FULL.md §4.5.c).

use std::collections::HashMap;

use dt_core::NodeId;
use dt_spatial::{FloodGrid, RoadNetwork, IMPASSABLE_DEPTH_M};

use crate::peer::PeerSnapshot;

#[derive(Clone, Copy)]
struct TopologyEntry {
    /// `false` if the node's cell is inundated past `IMPASSABLE_DEPTH_M` —
    /// such nodes are left zeroed and the influence BFS never expands
    /// through them.
    usable: bool,
    top_person: i64,
    top_influence: i32,
}

/// A snapshot of the road network overlaid with the cross-mover peer table.
///
/// Built once per step from the previous step's gossip (SPEC_FULL.md §4.8);
/// every owned agent's influence BFS reads the same `InfluenceTopology`.
pub struct InfluenceTopology {
    entries: Vec<TopologyEntry>,
    leader_routes: HashMap<i64, Vec<NodeId>>,
}

impl InfluenceTopology {
    pub fn build(network: &RoadNetwork, flood: &FloodGrid, peers: &[PeerSnapshot]) -> Self {
        let mut entries: Vec<TopologyEntry> = network
            .node_pos
            .iter()
            .map(|&pos| TopologyEntry {
                usable: flood.depth_at(pos) <= IMPASSABLE_DEPTH_M,
                top_person: -1,
                top_influence: -1,
            })
            .collect();

        let mut leader_routes = HashMap::with_capacity(peers.len());
        for peer in peers {
            leader_routes.insert(peer.id.0 as i64, peer.route.clone());

            let Some(entry) = entries.get_mut(peer.node.index()) else {
                continue;
            };
            if peer.influence > entry.top_influence {
                entry.top_influence = peer.influence;
                entry.top_person = peer.id.0 as i64;
            }
        }

        Self { entries, leader_routes }
    }

    #[inline]
    pub fn is_usable(&self, node: NodeId) -> bool {
        self.entries.get(node.index()).is_some_and(|e| e.usable)
    }

    #[inline]
    pub fn top_influence(&self, node: NodeId) -> i32 {
        self.entries.get(node.index()).map_or(-1, |e| e.top_influence)
    }

    #[inline]
    pub fn top_person(&self, node: NodeId) -> i64 {
        self.entries.get(node.index()).map_or(-1, |e| e.top_person)
    }

    /// The last-published route of the agent with this id, if it is known
    /// (i.e. it gossiped on the intra-mover topic last step).
    pub fn leader_route(&self, id: i64) -> Option<&[NodeId]> {
        self.leader_routes.get(&id).map(Vec::as_slice)
    }
}
