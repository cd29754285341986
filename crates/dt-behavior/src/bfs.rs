//! Bounded per-agent influence BFS (SPEC_FULL.md §4.5.c).

use std::collections::{HashSet, VecDeque};

use dt_core::NodeId;
use dt_spatial::RoadNetwork;

use crate::topology::InfluenceTopology;

/// Buffer capacity for one agent's BFS task. Overflow is reported rather
/// than silently truncating the search.
pub const BFS_BUFFER_CAPACITY: usize = 1000;

struct BufferedNode {
    node: NodeId,
    parent: Option<usize>,
}

/// The two routes derived from one agent's bounded BFS.
pub struct InfluenceBfsResult {
    /// Root's next hop toward the highest-elevation node visited, ordered
    /// root-exclusive → target.
    pub route_to_top: Vec<NodeId>,
    /// Root's next hop toward the node with the highest `top_influence`
    /// visited, ordered root-exclusive → target.
    pub route_to_leader: Vec<NodeId>,
    /// `true` if the task buffer filled before the BFS frontier was
    /// exhausted — the search was cut short for this agent.
    pub overflowed: bool,
}

/// Run a bounded BFS from `root` within squared radius `radius_sq`, tracking
/// the highest-elevation node and the node with the highest `top_influence`
/// encountered.
pub fn bounded_influence_bfs(
    network: &RoadNetwork,
    topology: &InfluenceTopology,
    root: NodeId,
) -> InfluenceBfsResult {
    bounded_influence_bfs_with_radius(network, topology, root, f32::MAX)
}

/// As [`bounded_influence_bfs`] but with an explicit squared-radius cutoff —
/// split out so tests can exercise the radius bound without a huge fixture.
pub fn bounded_influence_bfs_with_radius(
    network: &RoadNetwork,
    topology: &InfluenceTopology,
    root: NodeId,
    radius_sq: f32,
) -> InfluenceBfsResult {
    let root_pos = network.node_pos[root.index()];

    let mut buffer = Vec::with_capacity(BFS_BUFFER_CAPACITY);
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut overflowed = false;

    buffer.push(BufferedNode { node: root, parent: None });
    visited.insert(root);
    queue.push_back(0usize);

    let mut best_height_idx = 0usize;
    let mut best_height = network.node_height[root.index()];
    let mut best_influence_idx: Option<usize> = None;
    let mut best_influence = topology.top_influence(root);
    if best_influence > -1 {
        best_influence_idx = Some(0);
    }

    'search: while let Some(cur_idx) = queue.pop_front() {
        let cur_node = buffer[cur_idx].node;
        for &nb in network.neighbors(cur_node) {
            if visited.contains(&nb) || !topology.is_usable(nb) {
                continue;
            }
            if root_pos.distance_sq(network.node_pos[nb.index()]) > radius_sq {
                visited.insert(nb);
                continue;
            }
            if buffer.len() >= BFS_BUFFER_CAPACITY {
                overflowed = true;
                break 'search;
            }

            visited.insert(nb);
            let idx = buffer.len();
            buffer.push(BufferedNode { node: nb, parent: Some(cur_idx) });

            let height = network.node_height[nb.index()];
            if height > best_height {
                best_height = height;
                best_height_idx = idx;
            }
            let influence = topology.top_influence(nb);
            if influence > best_influence {
                best_influence = influence;
                best_influence_idx = Some(idx);
            }

            queue.push_back(idx);
        }
    }

    InfluenceBfsResult {
        route_to_top: reconstruct(&buffer, best_height_idx),
        route_to_leader: best_influence_idx.map(|idx| reconstruct(&buffer, idx)).unwrap_or_default(),
        overflowed,
    }
}

/// Walk back-pointers from `idx` to the root and return the path in
/// root-exclusive → target order. Returns an empty route if `idx` is the
/// root itself.
fn reconstruct(buffer: &[BufferedNode], idx: usize) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut cur = idx;
    while let Some(parent) = buffer[cur].parent {
        path.push(buffer[cur].node);
        cur = parent;
    }
    path.reverse();
    path
}
