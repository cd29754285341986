//! Fluent builder for constructing a [`Coordinator`].

use std::sync::Arc;

use dt_bus::Transport;
use dt_schedule::CycleSchedule;
use dt_spatial::FloodProvider;

use crate::coordinator::Coordinator;

/// Fluent builder for [`Coordinator`].
///
/// # Required inputs
///
/// - a universe id (distinguishes concurrent runs sharing one broker)
/// - `T: Transport` — the pub/sub bus
/// - `F: FloodProvider` — the per-step flood source feeding aggregate stats
/// - [`CycleSchedule`] — the ordered `(announce_step, step_count)` table
///
/// # Optional inputs
///
/// | Method                       | Default |
/// |-------------------------------|---------|
/// | `.minimum_step_time_ms(ms)`   | `0`     |
pub struct CoordinatorBuilder {
    universe: String,
    transport: Arc<dyn Transport>,
    flood: Box<dyn FloodProvider>,
    schedule: CycleSchedule,
    minimum_step_time_ms: i64,
}

impl CoordinatorBuilder {
    pub fn new<T, F>(universe: impl Into<String>, transport: T, flood: F, schedule: CycleSchedule) -> Self
    where
        T: Transport + 'static,
        F: FloodProvider + 'static,
    {
        Self {
            universe: universe.into(),
            transport: Arc::new(transport),
            flood: Box::new(flood),
            schedule,
            minimum_step_time_ms: 0,
        }
    }

    /// Build from a bus already shared across threads (e.g. across worker
    /// tasks spawned in-process), avoiding a second layer of indirection
    /// around an `Arc` the caller already holds.
    pub fn with_shared_transport<F>(universe: impl Into<String>, transport: Arc<dyn Transport>, flood: F, schedule: CycleSchedule) -> Self
    where
        F: FloodProvider + 'static,
    {
        Self {
            universe: universe.into(),
            transport,
            flood: Box::new(flood),
            schedule,
            minimum_step_time_ms: 0,
        }
    }

    /// Per-step wall-clock floor in milliseconds. Negative means block for
    /// an operator keypress between steps (SPEC_FULL.md §4.1, §6).
    pub fn minimum_step_time_ms(mut self, ms: i64) -> Self {
        self.minimum_step_time_ms = ms;
        self
    }

    pub fn build(self) -> Coordinator {
        Coordinator::new(self.universe, self.transport, self.flood, self.schedule, self.minimum_step_time_ms)
    }
}
