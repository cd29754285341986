//! Unit tests for dt-spatial.

#[cfg(test)]
mod helpers {
    use dt_core::Point;
    use crate::{RoadNetwork, RoadNetworkBuilder};

    /// Build a small grid network for testing.
    ///
    /// Nodes (x, y):
    ///   0:(0,0)  1:(0,1)  2:(0,2)
    ///   3:(1,0)           4:(1,2)
    ///
    /// Undirected edges: 0-1(10), 1-2(10), 0-3(50), 2-4(10), 3-4(10)
    ///
    /// Shortest path 0→4 by length: 0→1→2→4 (30) beats 0→3→4 (60).
    /// Node 4 is marked a shelter.
    pub fn grid_network() -> (RoadNetwork, [dt_core::NodeId; 5]) {
        let mut b = RoadNetworkBuilder::new();

        let n0 = b.add_node(Point::new(0.0, 0.0), 1.0);
        let n1 = b.add_node(Point::new(0.0, 1.0), 1.0);
        let n2 = b.add_node(Point::new(0.0, 2.0), 1.0);
        let n3 = b.add_node(Point::new(1.0, 0.0), 1.0);
        let n4 = b.add_node(Point::new(1.0, 2.0), 1.0);

        b.add_road(n0, n1, 10.0);
        b.add_road(n1, n2, 10.0);
        b.add_road(n2, n4, 10.0);
        b.add_road(n0, n3, 50.0);
        b.add_road(n3, n4, 10.0);

        let mut net = b.build();
        net.is_shelter[n4.index()] = true;
        (net, [n0, n1, n2, n3, n4])
    }
}

// ── Builder & network structure ────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use dt_core::Point;
    use crate::RoadNetworkBuilder;

    #[test]
    fn empty_build() {
        let net = RoadNetworkBuilder::new().build();
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.edge_count(), 0);
        assert!(net.is_empty());
    }

    #[test]
    fn single_road() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(Point::new(30.0, -88.0), 0.0);
        let c = b.add_node(Point::new(30.1, -88.0), 0.0);
        b.add_road(a, c, 1_000.0);
        let net = b.build();
        assert_eq!(net.node_count(), 2);
        assert_eq!(net.edge_count(), 2); // bidirectional
    }

    #[test]
    fn neighbors_sorted_ascending() {
        let (net, [n0, n1, n2, n3, n4]) = super::helpers::grid_network();
        assert_eq!(net.neighbors(n1), &[n0, n2]);
        let _ = (n3, n4);
    }

    #[test]
    fn degrees() {
        let (net, [n0, n1, n2, n3, n4]) = super::helpers::grid_network();
        assert_eq!(net.out_degree(n0), 2);
        assert_eq!(net.out_degree(n1), 2);
        assert_eq!(net.out_degree(n2), 2);
        assert_eq!(net.out_degree(n3), 2);
        assert_eq!(net.out_degree(n4), 2);
    }

    #[test]
    fn directed_only_edge() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(Point::new(0.0, 0.0), 0.0);
        let c = b.add_node(Point::new(0.0, 1.0), 0.0);
        b.add_directed_edge(a, c, 100.0);
        let net = b.build();
        assert_eq!(net.edge_count(), 1);
        assert_eq!(net.out_degree(a), 1);
        assert_eq!(net.out_degree(c), 0);
        assert!(net.are_adjacent(a, c));
        assert!(!net.are_adjacent(c, a));
    }
}

// ── Spatial snap ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod snap {
    use dt_core::Point;
    use crate::RoadNetworkBuilder;

    #[test]
    fn snap_exact_position() {
        let (net, [n0, ..]) = super::helpers::grid_network();
        let snapped = net.snap_to_node(Point::new(0.0, 0.0)).unwrap();
        assert_eq!(snapped, n0);
    }

    #[test]
    fn snap_nearest() {
        let (net, [n0, n1, ..]) = super::helpers::grid_network();
        let near_n0 = net.snap_to_node(Point::new(0.0, 0.4)).unwrap();
        assert_eq!(near_n0, n0);
        let near_n1 = net.snap_to_node(Point::new(0.0, 0.6)).unwrap();
        assert_eq!(near_n1, n1);
    }

    #[test]
    fn empty_network_returns_none() {
        let net = RoadNetworkBuilder::new().build();
        assert!(net.snap_to_node(Point::new(0.0, 0.0)).is_none());
    }
}

// ── Dijkstra routing ──────────────────────────────────────────────────────────

#[cfg(test)]
mod dijkstra {
    use dt_core::Point;
    use crate::{DijkstraRouter, Router, RoadNetworkBuilder, SpatialError};

    #[test]
    fn trivial_same_node() {
        let (net, [n0, ..]) = super::helpers::grid_network();
        let r = DijkstraRouter.route(&net, n0, n0).unwrap();
        assert!(r.is_trivial());
    }

    #[test]
    fn shortest_path_correct() {
        let (net, [n0, n1, n2, _, n4]) = super::helpers::grid_network();
        let route = DijkstraRouter.route(&net, n0, n4).unwrap();
        assert_eq!(route.nodes, vec![n0, n1, n2, n4]);
        assert_eq!(route.hop_count(), 3);
    }

    #[test]
    fn no_route_disconnected() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(Point::new(0.0, 0.0), 0.0);
        let c = b.add_node(Point::new(1.0, 0.0), 0.0);
        let net = b.build();
        let result = DijkstraRouter.route(&net, a, c);
        assert!(matches!(result, Err(SpatialError::NoRoute { .. })));
    }

    #[test]
    fn directed_one_way_blocks_return() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(Point::new(0.0, 0.0), 0.0);
        let c = b.add_node(Point::new(0.0, 1.0), 0.0);
        b.add_directed_edge(a, c, 100.0);
        let net = b.build();

        assert!(DijkstraRouter.route(&net, a, c).is_ok());
        assert!(DijkstraRouter.route(&net, c, a).is_err());
    }
}

// ── Flood-aware BFS routing ───────────────────────────────────────────────────

#[cfg(test)]
mod flood_router {
    use dt_core::Point;
    use crate::{FloodAwareBfsRouter, FloodGrid, Router};

    fn dry_grid() -> FloodGrid {
        FloodGrid::dry(1.0, 10, 10)
    }

    #[test]
    fn routes_toward_nearest_shelter() {
        let (net, [n0, n1, n2, _, n4]) = super::helpers::grid_network();
        let mut router = FloodAwareBfsRouter::new();
        router.recompute(&net, &dry_grid());

        // n4 is the only shelter. n0's shortest hop-path is via n3 (2 hops)
        // unless flood blocks it — dry grid, so BFS picks the fewer-hop path.
        let route = router.route(&net, n0, n4).unwrap();
        assert_eq!(*route.nodes.last().unwrap(), n4);
        assert!(route.nodes.contains(&n1) || route.nodes.contains(&n2) || route.nodes.len() <= 3);
    }

    #[test]
    fn shelter_node_routes_to_itself() {
        let (net, [.., n4]) = super::helpers::grid_network();
        let mut router = FloodAwareBfsRouter::new();
        router.recompute(&net, &dry_grid());
        let route = router.route(&net, n4, n4).unwrap();
        assert!(route.is_trivial());
    }

    #[test]
    fn flooded_node_still_reachable_but_cannot_relay() {
        // shelter(S) -- A -- B, a single chain with no alternate path.
        let mut b = crate::RoadNetworkBuilder::new();
        let s = b.add_node(Point::new(0.0, 0.0), 0.0);
        let a = b.add_node(Point::new(0.0, 1.0), 0.0);
        let node_b = b.add_node(Point::new(0.0, 2.0), 0.0);
        b.add_road(s, a, 10.0);
        b.add_road(a, node_b, 10.0);
        let mut net = b.build();
        net.is_shelter[s.index()] = true;

        // Submerge A's own cell.
        let mut depths = vec![0.0; 3];
        depths[1] = 1.0;
        let flood = FloodGrid::new(1.0, 1, 3, depths);

        let mut router = FloodAwareBfsRouter::new();
        router.recompute(&net, &flood);

        // A is flooded but was admitted directly from the shelter, so it is
        // still reachable itself.
        assert!(router.is_reachable(a));
        let route = router.route(&net, a, s).unwrap();
        assert_eq!(route.nodes, vec![a, s]);

        // B's only path to the shelter runs through A, and a flooded node
        // cannot relay further — B never gets admitted.
        assert!(!router.is_reachable(node_b));
        assert!(router.route(&net, node_b, s).is_err());
    }

    #[test]
    fn unreachable_node_errors() {
        let mut b = crate::RoadNetworkBuilder::new();
        let a = b.add_node(Point::new(0.0, 0.0), 0.0);
        let shelter = b.add_node(Point::new(5.0, 5.0), 0.0);
        let mut net = b.build();
        net.is_shelter[shelter.index()] = true;
        // a has no edges at all — cannot reach the shelter.
        let mut router = FloodAwareBfsRouter::new();
        router.recompute(&net, &dry_grid());
        assert!(router.route(&net, a, shelter).is_err());
    }
}

// ── Flood grid ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod flood_grid {
    use dt_core::Point;
    use crate::FloodGrid;

    #[test]
    fn depth_lookup_by_cell() {
        let grid = FloodGrid::new(2.0, 2, 2, vec![0.1, 0.2, 0.3, 0.4]);
        // cell (0,0) -> row 0 col 0 -> depth 0.1
        assert_eq!(grid.depth_at(Point::new(0.5, 0.5)), 0.1);
        // cell (1,1) -> row 1 col 1 -> depth 0.4
        assert_eq!(grid.depth_at(Point::new(2.5, 2.5)), 0.4);
    }

    #[test]
    fn out_of_grid_is_dry() {
        let grid = FloodGrid::new(1.0, 2, 2, vec![9.0, 9.0, 9.0, 9.0]);
        assert_eq!(grid.depth_at(Point::new(-1.0, 0.0)), 0.0);
        assert_eq!(grid.depth_at(Point::new(100.0, 0.0)), 0.0);
    }

    #[test]
    fn aggregates() {
        let grid = FloodGrid::new(1.0, 2, 2, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(grid.total_depth(), 6.0);
        assert_eq!(grid.max_depth(), 3.0);
    }
}

// ── Map Store loader ──────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::load_map;

    const NODES: &[u8] = b"\
h1\nh2\nh3\nh4\nh5\n\
0,0.0,0.0,1.0\n\
1,0.0,1.0,1.0\n\
2,1.0,1.0,1.0\n";

    const LINKS: &[u8] = b"\
label,nid1,nid2,length\n\
a,0,1,10.0\n\
b,1,2,10.0\n";

    const SHELTERS: &[u8] = b"\
label,x,y\n\
s,1.0,1.0\n";

    #[test]
    fn loads_nodes_links_and_shelter() {
        let net = load_map(Cursor::new(NODES), Cursor::new(LINKS), Cursor::new(SHELTERS), 1.0);
        assert_eq!(net.node_count(), 3);
        assert_eq!(net.edge_count(), 4); // 2 links, bidirectional
        assert!(net.is_shelter[2]);
        assert!(!net.is_shelter[0]);
    }

    #[test]
    fn malformed_row_is_skipped_not_fatal() {
        let bad_links: &[u8] = b"\
label,nid1,nid2,length\n\
a,0,1,10.0\n\
bad,not_a_number,2,10.0\n";
        let net = load_map(Cursor::new(NODES), Cursor::new(bad_links), Cursor::new(SHELTERS), 1.0);
        assert_eq!(net.edge_count(), 2); // only the good row loaded
    }
}
