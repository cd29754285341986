//! Map Store — CSV loading of the node, link, and shelter tables into a
//! [`RoadNetwork`].
//!
//! # Table formats
//!
//! | Table    | Header lines | Columns                  |
//! |----------|--------------|---------------------------|
//! | nodes    | 5            | `nid, x, y, height`       |
//! | links    | 1            | `_, nid1, nid2, length`   |
//! | shelters | 1            | `_, x, y`                 |
//!
//! Shelter coordinates are scaled by `flood_mesh_size` before the
//! nearest-node search — the shelter table stores grid-cell coordinates,
//! not map units. Links are inserted symmetrically. Malformed rows are
//! skipped rather than aborting the whole table (SPEC_FULL.md §4.2, §7).
//!
//! Node ids in the CSV are assumed dense, `0..node_count`, matching every
//! generator this framework has been pointed at; a sparse id space would
//! need a remapping pass this loader does not perform.

use std::io::Read;

use serde::Deserialize;

use dt_core::{NodeId, Point};

use crate::network::{RoadNetwork, RoadNetworkBuilder};

const NODE_HEADER_LINES: usize = 5;
const LINK_HEADER_LINES: usize = 1;
const SHELTER_HEADER_LINES: usize = 1;

#[derive(Deserialize)]
struct NodeRow {
    _nid: u32,
    x: f32,
    y: f32,
    height: f32,
}

#[derive(Deserialize)]
struct LinkRow {
    _label: String,
    nid1: u32,
    nid2: u32,
    length: f32,
}

#[derive(Deserialize)]
struct ShelterRow {
    _label: String,
    x: f32,
    y: f32,
}

/// Load a complete [`RoadNetwork`] from the three source tables.
///
/// `flood_mesh_size` converts the shelter table's grid-cell coordinates
/// into map units before snapping to the nearest node.
pub fn load_map<N: Read, L: Read, S: Read>(
    nodes: N,
    links: L,
    shelters: S,
    flood_mesh_size: f32,
) -> RoadNetwork {
    let mut builder = RoadNetworkBuilder::new();

    for row in read_skipping_header::<NodeRow, _>(nodes, NODE_HEADER_LINES) {
        builder.add_node(Point::new(row.x, row.y), row.height);
    }

    for row in read_skipping_header::<LinkRow, _>(links, LINK_HEADER_LINES) {
        if row.nid1 as usize >= builder.node_count() || row.nid2 as usize >= builder.node_count() {
            tracing::warn!(nid1 = row.nid1, nid2 = row.nid2, "link references unknown node, skipped");
            continue;
        }
        builder.add_road(NodeId(row.nid1), NodeId(row.nid2), row.length);
    }

    let mut network = builder.build();

    for row in read_skipping_header::<ShelterRow, _>(shelters, SHELTER_HEADER_LINES) {
        let pos = Point::new(row.x * flood_mesh_size, row.y * flood_mesh_size);
        if let Some(nearest) = network.snap_to_node(pos) {
            network.is_shelter[nearest.index()] = true;
        }
    }

    network
}

/// Parse `reader` as headerless CSV after skipping `header_lines` raw
/// lines, yielding one `T` per well-formed row. Rows that fail to parse
/// are logged and dropped rather than aborting the read.
fn read_skipping_header<T, R>(reader: R, header_lines: usize) -> Vec<T>
where
    T: for<'de> Deserialize<'de>,
    R: Read,
{
    let mut text = String::new();
    let mut reader = reader;
    if reader.read_to_string(&mut text).is_err() {
        return Vec::new();
    }

    let body: String = text
        .lines()
        .skip(header_lines)
        .collect::<Vec<_>>()
        .join("\n");

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    csv_reader
        .deserialize::<T>()
        .filter_map(|result| match result {
            Ok(row) => Some(row),
            Err(e) => {
                tracing::warn!(error = %e, "malformed map-store row, skipped");
                None
            }
        })
        .collect()
}
