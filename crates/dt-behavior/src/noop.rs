//! A no-op behavior model — agents never move or publish anything.

use dt_agent::GraphAgentStore;

use crate::context::StepContext;
use crate::engine::StepOutput;
use crate::error::BehaviorResult;
use crate::model::BehaviorModel;

/// A [`BehaviorModel`] that leaves the store untouched and produces no
/// output. Useful as a placeholder in tests or for a "frozen" population.
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn step(&self, _store: &mut GraphAgentStore, _ctx: &StepContext<'_>) -> BehaviorResult<StepOutput> {
        Ok(StepOutput::default())
    }
}
