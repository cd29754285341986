//! Immutable per-agent profile for field-bound agents.

/// Fixed behavioral parameters of a field-bound agent, loaded once at
/// startup and never mutated during the run (SPEC_FULL.md §3, §4.6).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldAgentProfile {
    /// Steps spent in `Preparing` before the agent starts moving.
    pub prepare_time: i32,
    /// Base distance (in cells) the agent's force vector is scaled to
    /// before decay, each step.
    pub speed: f32,
    /// Straight-line bias applied toward the previous step's direction of
    /// travel. Not a person-CSV column (SPEC_FULL.md §4.6 profile loading);
    /// supplied at load time from the `Potential[]` configuration entry and
    /// shared by every agent loaded from that entry.
    pub bias_alpha: f32,
    /// Probability weight (multiplied against a media event's own
    /// `acquisition`) that a media broadcast wakes this agent from
    /// `Unaware`.
    pub acquisition: f32,
}

impl Default for FieldAgentProfile {
    fn default() -> Self {
        Self {
            prepare_time: 0,
            speed: 1.0,
            bias_alpha: 0.0,
            acquisition: 0.0,
        }
    }
}
