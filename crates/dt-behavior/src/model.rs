//! The `BehaviorModel` trait — the Graph Mover's extension point.

use dt_agent::GraphAgentStore;

use crate::context::StepContext;
use crate::error::BehaviorResult;
use crate::engine::StepOutput;

/// Pluggable whole-population step behavior for a Graph Mover's slice of
/// agents.
///
/// A single call processes every owned agent for one simulation step:
/// announcement, the per-agent influence BFS, and the cascade update
/// (SPEC_FULL.md §4.5). Unlike a per-agent callback, `step` needs the whole
/// owned population at once because the influence topology and the motion
/// update are computed from data that spans agents.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; the `parallel` Cargo feature may
/// run the per-agent BFS concurrently before the (always sequential) apply
/// pass.
pub trait BehaviorModel: Send + Sync + 'static {
    fn step(&self, store: &mut GraphAgentStore, ctx: &StepContext<'_>) -> BehaviorResult<StepOutput>;
}
