//! Read-only per-step state shared by every agent's cascade update.

use dt_core::Point;
use dt_spatial::{FloodGrid, RoadNetwork};

use crate::topology::InfluenceTopology;

/// A read-only snapshot of the state one Graph Mover step needs, built once
/// per step and shared (immutably) across every owned agent's cascade
/// update.
///
/// `flood` is expected to already carry the QR-flood overlay
/// (SPEC_FULL.md §4.5.a — `FloodGrid::with_forced_depth`) and `topology`
/// to already carry the peer overlay (§4.5.c).
pub struct StepContext<'a> {
    pub network: &'a RoadNetwork,
    pub flood: &'a FloodGrid,
    pub topology: &'a InfluenceTopology,
    /// Squared Euclidean radius (`MaximumInfluenceLength²`) bounding the
    /// per-agent influence BFS.
    pub influence_radius_sq: f32,
    /// User-injected "QR antenna" event positions for this step — each
    /// zeroes `info_access` for agents within squared distance 10⁶.
    pub qr_antenna_points: &'a [Point],
    /// Precomputed view-offset table (`view::build_view_offsets`).
    pub view_offsets: &'a [(i32, i32)],
    pub step: u32,
    pub announce_step: u32,
}
