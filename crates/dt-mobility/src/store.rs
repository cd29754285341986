//! Core agent storage: `FieldAgentStore` (SoA data) and `FieldAgentRngs`
//! (per-agent RNG), mirroring the `dt-agent` split of the same name.
//!
//! The media-acquisition draw (SPEC_FULL.md §4.6) needs `&mut FieldAgentRngs`
//! alongside `&FieldAgentStore`/`&PotentialField`; keeping RNG state in its
//! own struct avoids the same double-borrow problem `dt-agent::AgentRngs`
//! was split out to solve.

use dt_core::{AgentId, AgentRng};

use crate::profile::FieldAgentProfile;
use crate::status::FieldStatus;

// ── FieldAgentRngs ────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state for field-bound agents.
pub struct FieldAgentRngs {
    pub inner: Vec<AgentRng>,
}

impl FieldAgentRngs {
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    #[inline]
    pub fn get_mut(&mut self, local: usize) -> &mut AgentRng {
        &mut self.inner[local]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── FieldAgentStore ───────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for every field-bound (grid) agent.
///
/// Every `Vec` has exactly `count` elements; a local index (`0..count`) is
/// the index into all of them. `dt-sim` maps local indices to global
/// `AgentId`s via the worker's registered range, the same convention
/// `dt-behavior::GraphMoverEngine` uses for its owned slice.
pub struct FieldAgentStore {
    /// Number of agents. Equal to the length of every SoA `Vec`.
    pub count: usize,

    /// Current cell coordinates.
    pub cell_x: Vec<i32>,
    pub cell_y: Vec<i32>,

    /// The force vector computed on the *previous* step, read to form this
    /// step's straight-line bias before being overwritten (SPEC_FULL.md
    /// §4.6, step 3).
    pub last_vx: Vec<f32>,
    pub last_vy: Vec<f32>,

    /// Fractional sub-cell bank, each in `[0.0, 1.0)`.
    pub bank_px: Vec<f32>,
    pub bank_py: Vec<f32>,

    /// Steps remaining in `Preparing` before the agent advances to `Moving`.
    pub prepare_timer: Vec<i32>,

    pub status: Vec<FieldStatus>,

    /// Immutable behavioral parameters, loaded once from the person table.
    pub profile: Vec<FieldAgentProfile>,
}

impl FieldAgentStore {
    /// Allocate a store for `count` agents, every field zeroed / `Unaware`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            cell_x: vec![0; count],
            cell_y: vec![0; count],
            last_vx: vec![0.0; count],
            last_vy: vec![0.0; count],
            bank_px: vec![0.0; count],
            bank_py: vec![0.0; count],
            prepare_timer: vec![0; count],
            status: vec![FieldStatus::default(); count],
            profile: vec![FieldAgentProfile::default(); count],
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Every local agent index, `0..count`.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        0..self.count
    }
}
