//! `OutputRecorder<W>` — bridges a [`Coordinator`] to an [`OutputWriter`].

use dt_bus::payload::StatEntity;
use dt_sim::Coordinator;

use crate::row::{PersonRow, StatRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// Snapshots a [`Coordinator`]'s per-step aggregate into any [`OutputWriter`]
/// backend (CSV, SQLite, Parquet, …).
///
/// Errors from the writer are stored internally because the run loop that
/// drives the coordinator has no natural place to propagate a `Result` from
/// a recording step without interrupting the barrier. After the run
/// completes, check for errors with [`take_error`][Self::take_error].
pub struct OutputRecorder<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> OutputRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run loop returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Record the batch and statistics produced by the coordinator's most
    /// recent `publish_step` call. Call once per step, right after
    /// `publish_step` returns its `StatEntity`.
    pub fn record_step(&mut self, coordinator: &Coordinator, stats: &StatEntity) {
        let (cycle, step) = coordinator.last_step();

        let rows: Vec<PersonRow> = coordinator
            .aggregate()
            .iter()
            .enumerate()
            .map(|(index, p)| PersonRow {
                cycle,
                step,
                index: index as u32,
                id: p.id,
                x: p.x,
                y: p.y,
                status: p.status,
                access: p.info_access,
            })
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_persons(&rows);
            self.store_err(result);
        }

        let stat_row = StatRow {
            cycle,
            step,
            affected_person: stats.affected_person,
            evacuated_person: stats.evacuated_person,
            total_flood: stats.total_flood,
            max_flood: stats.max_flood,
        };
        let result = self.writer.write_stat(&stat_row);
        self.store_err(result);
    }

    /// Flush and close the underlying writer.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}
