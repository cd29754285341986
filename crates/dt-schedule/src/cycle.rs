//! Cycle descriptor and schedule.
//!
//! A [`CycleSchedule`] is the ordered sequence of `(announce_step,
//! step_count)` pairs the Coordinator walks through, one per evacuation
//! scenario, wrapping with `cycle_index mod schedule.len()`.

use dt_core::Tick;

/// One cycle's parameters: which step a scripted announcement fires at, and
/// how many steps the cycle runs for.
///
/// Invariant: `0 <= announce_step <= step_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleDescriptor {
    pub announce_step: u32,
    pub step_count: u32,
}

impl CycleDescriptor {
    pub fn new(announce_step: u32, step_count: u32) -> Self {
        debug_assert!(announce_step <= step_count);
        Self { announce_step, step_count }
    }
}

/// The full sequence of cycles a run walks through.
#[derive(Clone, Debug, Default)]
pub struct CycleSchedule {
    cycles: Vec<CycleDescriptor>,
}

impl CycleSchedule {
    pub fn new(cycles: Vec<CycleDescriptor>) -> Self {
        Self { cycles }
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    /// The descriptor for `cycle_index`, wrapping modulo the schedule
    /// length. Panics if the schedule is empty.
    pub fn at(&self, cycle_index: u64) -> CycleDescriptor {
        self.cycles[(cycle_index % self.cycles.len() as u64) as usize]
    }
}

/// Tracks the Coordinator's position in cycle/step time.
///
/// Mirrors the teacher's `Tick`-based clock but counts steps within a cycle
/// rather than a single flat counter, since a cycle's `step_count` varies
/// per entry in the schedule.
#[derive(Clone, Copy, Debug, Default)]
pub struct CycleClock {
    pub cycle_index: u64,
    pub step: u32,
    /// `true` when the next coordinator action must be `publish_cycle`
    /// rather than `publish_step`.
    pub needs_cycle_start: bool,
}

impl CycleClock {
    pub fn new() -> Self {
        Self {
            cycle_index: 0,
            step: 0,
            needs_cycle_start: true,
        }
    }

    /// Reset to the start of the next cycle.
    pub fn start_cycle(&mut self) {
        self.step = 0;
        self.needs_cycle_start = false;
    }

    /// Advance one step; if this step completes the cycle (per `schedule`),
    /// mark that the next action must start a new cycle.
    pub fn advance_step(&mut self, schedule: &CycleSchedule) {
        let descriptor = schedule.at(self.cycle_index);
        self.step += 1;
        if self.step >= descriptor.step_count {
            self.cycle_index += 1;
            self.needs_cycle_start = true;
        }
    }

    /// Total steps elapsed since the run began, as a flat `Tick` — used for
    /// aggregate logging only, never for per-cycle arithmetic.
    pub fn as_tick(&self, schedule: &CycleSchedule) -> Tick {
        let mut total = 0u64;
        for c in 0..self.cycle_index {
            total += schedule.at(c).step_count as u64;
        }
        Tick(total + self.step as u64)
    }
}
