//! `dt-schedule` — cycle descriptor/clock and the media-broadcast event
//! table.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                |
//! |-----------|----------------------------------------------------------|
//! | [`cycle`] | `CycleDescriptor`, `CycleSchedule`, `CycleClock`         |
//! | [`media`] | `MediaEvent`, `active_events`                            |
//! | [`loader`]| `load_cycle_schedule_csv`, `load_cycle_schedule_reader`  |
//! | [`error`] | `ScheduleError`, `ScheduleResult<T>`                     |
//!
//! # Cycle model (summary)
//!
//! The Coordinator walks an ordered [`cycle::CycleSchedule`] of
//! `(announce_step, step_count)` pairs, one per evacuation scenario,
//! wrapping `cycle_index mod schedule.len()`. A [`cycle::CycleClock`]
//! tracks position within that schedule.

pub mod cycle;
pub mod error;
pub mod loader;
pub mod media;

#[cfg(test)]
mod tests;

pub use cycle::{CycleClock, CycleDescriptor, CycleSchedule};
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_cycle_schedule_csv, load_cycle_schedule_reader};
pub use media::{active_events, MediaEvent};
