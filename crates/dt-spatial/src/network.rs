//! Road network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Edge arrays are sorted first by source node, then — within a node's
//! outgoing range — by destination node id. The latter ordering is not
//! cosmetic: the route server's multi-source BFS must expand neighbors in a
//! reproducible order, and "ascending node id" is the agreed tie-break
//! (SPEC_FULL.md §4.4).
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(x, y)` to the nearest `NodeId`. Used both
//! to snap shelter coordinates to the nearest node at load time and to snap
//! an agent's raw `(x, y)` to its starting node.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use dt_core::{NodeId, Point};

// ── R-tree node entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct NodeEntry {
    point: [f32; 2],
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// The road graph in CSR format plus a spatial index for node snapping.
///
/// All fields are `pub` for direct indexed access on hot paths. Do not
/// construct directly; use [`RoadNetworkBuilder`].
pub struct RoadNetwork {
    /// Planar position of each node. Indexed by `NodeId`.
    pub node_pos: Vec<Point>,
    /// Elevation of each node, used by victimization (§4.5.d) and the
    /// influence BFS's highest-node search (§4.5.c).
    pub node_height: Vec<f32>,
    /// `true` if the node is a shelter — the terminus every route must
    /// reach.
    pub is_shelter: Vec<bool>,

    /// CSR row pointer. Outgoing edges of node `n` occupy
    /// `node_out_start[n] .. node_out_start[n+1]`. Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,
    /// Destination node of each CSR slot, sorted ascending within each row.
    pub edge_to: Vec<NodeId>,
    /// Length of each edge in map units, parallel to `edge_to`.
    pub edge_length: Vec<f32>,

    spatial_idx: RTree<NodeEntry>,
}

impl RoadNetwork {
    /// Construct an empty network with no nodes or edges. Any routing
    /// request against it fails with [`crate::SpatialError::NoRoute`].
    pub fn empty() -> Self {
        RoadNetworkBuilder::new().build()
    }

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// Neighbor node ids of `node`, ascending by id (the route server's
    /// required expansion order).
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        &self.edge_to[start..end]
    }

    /// Parallel edge lengths for `neighbors(node)`.
    #[inline]
    pub fn neighbor_lengths(&self, node: NodeId) -> &[f32] {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        &self.edge_length[start..end]
    }

    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// `true` if `b` is a neighbor of `a` — used to validate published
    /// routes (invariant 4, SPEC_FULL.md §8) and to detect the fatal
    /// route-integrity error (a route head that is not actually adjacent to
    /// the agent's current node).
    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Length of the edge from `a` to `b`, if adjacent.
    pub fn edge_length_between(&self, a: NodeId, b: NodeId) -> Option<f32> {
        let idx = self.neighbors(a).binary_search(&b).ok()?;
        Some(self.neighbor_lengths(a)[idx])
    }

    /// Return the `NodeId` of the nearest road node to `pos`. `None` only if
    /// the network has no nodes.
    pub fn snap_to_node(&self, pos: Point) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|e| e.id)
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// Nodes are assigned sequential `NodeId`s in the order they are added;
/// callers loading from a table that already assigns ids (the node CSV's
/// `nid` column) must add nodes in ascending `nid` order so that `NodeId`
/// matches the source id — the Map Store loader does this.
pub struct RoadNetworkBuilder {
    nodes: Vec<Point>,
    heights: Vec<f32>,
    shelters: Vec<bool>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from: NodeId,
    to: NodeId,
    length: f32,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            heights: Vec::new(),
            shelters: Vec::new(),
            raw_edges: Vec::new(),
        }
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            heights: Vec::with_capacity(nodes),
            shelters: Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a road node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: Point, height: f32) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        self.heights.push(height);
        self.shelters.push(false);
        id
    }

    /// Mark a previously added node as a shelter.
    pub fn set_shelter(&mut self, node: NodeId) {
        self.shelters[node.index()] = true;
    }

    /// Add a **directed** edge from `from` to `to`.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, length: f32) {
        self.raw_edges.push(RawEdge { from, to, length });
    }

    /// Add edges in **both directions** for an undirected road segment —
    /// the link table's rows are inserted symmetrically (SPEC_FULL.md §4.2).
    pub fn add_road(&mut self, a: NodeId, b: NodeId, length: f32) {
        self.add_directed_edge(a, b, length);
        self.add_directed_edge(b, a, length);
    }

    pub fn node_pos(&self, id: NodeId) -> Point {
        self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`RoadNetwork`].
    pub fn build(self) -> RoadNetwork {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        let mut raw = self.raw_edges;
        // Sort by (source, destination) so each node's CSR row is already
        // ascending-by-neighbor-id — the route server's tie-break.
        raw.sort_unstable_by_key(|e| (e.from.0, e.to.0));

        let edge_to: Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_length: Vec<f32> = raw.iter().map(|e| e.length).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &pos)| NodeEntry {
                point: [pos.x, pos.y],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        RoadNetwork {
            node_pos: self.nodes,
            node_height: self.heights,
            is_shelter: self.shelters,
            node_out_start,
            edge_to,
            edge_length,
            spatial_idx,
        }
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
