//! The `Coordinator` — cycle/step barrier, worker registration, and
//! aggregate statistics (SPEC_FULL.md §4.1).

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use dt_bus::payload::{AllEntity, CountEntity, CycleEntity, PreparedEntity, RegisteredEntity, StatEntity, StepEntity};
use dt_bus::{topics, Subscription, Transport};
use dt_schedule::{CycleClock, CycleSchedule};
use dt_spatial::FloodProvider;

use crate::error::{SimError, SimResult};

/// Bookkeeping the Coordinator keeps for one registered worker. Confined to
/// the Coordinator; workers never see this directly (SPEC_FULL.md §9
/// "global mutable state").
struct WorkerState {
    from: u32,
    to: u32,
    finished: bool,
}

/// Drives the simulation forward using a pub/sub barrier.
///
/// Owns the only cross-cycle mutable counters in the system (cycle index,
/// step, the worker table) — see SPEC_FULL.md §9. Create via
/// [`CoordinatorBuilder`][crate::CoordinatorBuilder].
pub struct Coordinator {
    universe: String,
    transport: Arc<dyn Transport>,
    flood: Box<dyn FloodProvider>,
    schedule: CycleSchedule,
    clock: CycleClock,
    workers: HashMap<String, WorkerState>,
    next_agent_id: u32,
    aggregate: Vec<AllEntity>,
    /// Cycle/step the current `aggregate` was collected for — captured
    /// before the clock advances, so an observer reading `aggregate()`
    /// after `publish_step` returns can still label the batch correctly.
    last_cycle: u64,
    last_step: u32,
    /// Milliseconds; negative means block for an operator keypress between
    /// steps instead of sleeping (SPEC_FULL.md §4.1, §6).
    minimum_step_time_ms: i64,
}

impl Coordinator {
    pub(crate) fn new(
        universe: String,
        transport: Arc<dyn Transport>,
        flood: Box<dyn FloodProvider>,
        schedule: CycleSchedule,
        minimum_step_time_ms: i64,
    ) -> Self {
        Self {
            universe,
            transport,
            flood,
            schedule,
            clock: CycleClock::new(),
            workers: HashMap::new(),
            next_agent_id: 0,
            aggregate: Vec::new(),
            last_cycle: 0,
            last_step: 0,
            minimum_step_time_ms,
        }
    }

    pub fn universe(&self) -> &str {
        &self.universe
    }

    pub fn clock(&self) -> CycleClock {
        self.clock
    }

    pub fn needs_cycle_start(&self) -> bool {
        self.clock.needs_cycle_start
    }

    /// The merged agent batch collected by the most recent `publish_step`
    /// call, for an output writer to snapshot. Empty before the first step.
    pub fn aggregate(&self) -> &[AllEntity] {
        &self.aggregate
    }

    /// The `(cycle_index, step)` the current `aggregate()` was collected
    /// for — captured before the clock advances past it.
    pub fn last_step(&self) -> (u64, u32) {
        (self.last_cycle, self.last_step)
    }

    /// Assign `worker_id` a contiguous agent-id range `[from, to)` starting
    /// at the running total and publish it back.
    ///
    /// Idempotent: a repeat registration of the same `worker_id` resets its
    /// finished flag but keeps the originally assigned range (SPEC_FULL.md
    /// §4.1: "A double-registration of the same worker overwrites its
    /// finished flag but not its id range.").
    pub fn register(&mut self, worker_id: &str, agent_count: u32) -> SimResult<RegisteredEntity> {
        let (from, to) = match self.workers.get_mut(worker_id) {
            Some(existing) => {
                existing.finished = false;
                (existing.from, existing.to)
            }
            None => {
                let from = self.next_agent_id;
                let to = from + agent_count;
                self.next_agent_id = to;
                self.workers.insert(worker_id.to_string(), WorkerState { from, to, finished: false });
                (from, to)
            }
        };

        let entity = RegisteredEntity { id: worker_id.to_string(), from, to };
        let bytes = serde_json::to_vec(&entity)?;
        self.transport.publish(&topics::registered(&self.universe, worker_id), &bytes)?;
        tracing::info!(worker_id, from, to, "worker registered");
        Ok(entity)
    }

    /// Announce the next cycle and block until every registered worker has
    /// published a "prepared" payload.
    ///
    /// Precondition: `needs_cycle_start()` is true.
    pub fn publish_cycle(&mut self) -> SimResult<()> {
        if !self.clock.needs_cycle_start {
            return Err(SimError::Config("publish_cycle called while a cycle is already in progress".into()));
        }
        if self.workers.is_empty() {
            return Err(SimError::Config("publish_cycle called with no registered workers".into()));
        }

        for worker in self.workers.values_mut() {
            worker.finished = false;
        }
        self.aggregate.clear();

        // Subscribe before publishing: InProcessBus drops a publish with no
        // subscriber, so the barrier wait must already be listening.
        let sub = self.transport.subscribe(&topics::prepared(&self.universe))?;

        let descriptor = self.schedule.at(self.clock.cycle_index);
        let entity = CycleEntity { announce_step: descriptor.announce_step };
        let bytes = serde_json::to_vec(&entity)?;
        self.transport.publish(&topics::cycle(&self.universe), &bytes)?;
        tracing::info!(cycle = self.clock.cycle_index, announce_step = descriptor.announce_step, "cycle announced");

        self.await_completions(&sub, |entity: PreparedEntity| (entity.id, entity.persons))?;

        self.clock.start_cycle();
        Ok(())
    }

    /// Announce the current step, block until every registered worker has
    /// published a "step" payload, then publish the merged agent set and
    /// aggregate statistics, wait out `minimum_step_time`, and advance the
    /// clock.
    ///
    /// Precondition: `needs_cycle_start()` is false.
    pub fn publish_step(&mut self) -> SimResult<StatEntity> {
        if self.clock.needs_cycle_start {
            return Err(SimError::Config("publish_step called before a cycle was started".into()));
        }

        for worker in self.workers.values_mut() {
            worker.finished = false;
        }
        self.aggregate.clear();

        let sub = self.transport.subscribe(&topics::persons(&self.universe))?;

        let count_entity = CountEntity { count: self.clock.step as i64 };
        let bytes = serde_json::to_vec(&count_entity)?;
        self.transport.publish(topics::flood_count(), &bytes)?;

        self.await_completions(&sub, |entity: StepEntity| (entity.id, entity.persons))?;

        let merged_bytes = serde_json::to_vec(&self.aggregate)?;
        self.transport.publish(topics::person_send_all(), &merged_bytes)?;

        // Aggregates (SPEC_FULL.md §3): affected = status 6, evacuated = status 7.
        let affected = self.aggregate.iter().filter(|p| p.status == 6).count() as u64;
        let evacuated = self.aggregate.iter().filter(|p| p.status == 7).count() as u64;
        let flood = self.flood.flood_for_step(self.clock.step)?;
        let stats = StatEntity {
            affected_person: affected,
            evacuated_person: evacuated,
            total_flood: flood.total_depth(),
            max_flood: flood.max_depth() as f64,
        };
        let stat_bytes = serde_json::to_vec(&stats)?;
        self.transport.publish(topics::stat_send(), &stat_bytes)?;
        tracing::info!(step = self.clock.step, affected, evacuated, "step complete");

        self.last_cycle = self.clock.cycle_index;
        self.last_step = self.clock.step;

        self.wait_for_next_step();
        self.clock.advance_step(&self.schedule);

        Ok(stats)
    }

    fn wait_for_next_step(&self) {
        if self.minimum_step_time_ms < 0 {
            let mut buf = String::new();
            let _ = std::io::stdin().read_line(&mut buf);
        } else if self.minimum_step_time_ms > 0 {
            std::thread::sleep(Duration::from_millis(self.minimum_step_time_ms as u64));
        }
    }

    /// Block on `sub` until every registered worker has reported finished,
    /// merging any published `persons` list into the aggregate buffer.
    fn await_completions<P, Extract>(&mut self, sub: &Subscription, extract: Extract) -> SimResult<()>
    where
        P: serde::de::DeserializeOwned,
        Extract: Fn(P) -> (String, Option<Vec<AllEntity>>),
    {
        while self.workers.values().any(|w| !w.finished) {
            let bytes = sub.recv_blocking()?;
            let payload: P = serde_json::from_slice(&bytes)?;
            let (id, persons) = extract(payload);
            if let Some(worker) = self.workers.get_mut(&id) {
                worker.finished = true;
                if let Some(persons) = persons {
                    self.aggregate.extend(persons);
                }
            }
        }
        Ok(())
    }
}
