//! CSV loader for the cycle table.
//!
//! # CSV format
//!
//! One header line, then one row per cycle:
//!
//! ```csv
//! announce_step,step_count
//! 3,48
//! 5,72
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::cycle::{CycleDescriptor, CycleSchedule};
use crate::error::{ScheduleError, ScheduleResult};

#[derive(Deserialize)]
struct CycleRow {
    announce_step: u32,
    step_count: u32,
}

pub fn load_cycle_schedule_csv(path: &Path) -> ScheduleResult<CycleSchedule> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_cycle_schedule_reader(file)
}

pub fn load_cycle_schedule_reader<R: Read>(reader: R) -> ScheduleResult<CycleSchedule> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut cycles = Vec::new();

    for result in csv_reader.deserialize::<CycleRow>() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!(error = %e, "malformed cycle row, skipped");
                continue;
            }
        };
        if row.announce_step > row.step_count {
            tracing::warn!(
                announce_step = row.announce_step,
                step_count = row.step_count,
                "cycle row violates announce_step <= step_count, skipped"
            );
            continue;
        }
        cycles.push(CycleDescriptor::new(row.announce_step, row.step_count));
    }

    Ok(CycleSchedule::new(cycles))
}
