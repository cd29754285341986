//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, PersonRow, StatRow};

/// Trait implemented by CSV, SQLite, and Parquet writers.
///
/// All methods are infallible from the recorder's perspective — errors are
/// stored internally and retrieved with [`OutputRecorder::take_error`][crate::OutputRecorder::take_error].
pub trait OutputWriter {
    /// Write a batch of per-agent rows for one step.
    fn write_persons(&mut self, rows: &[PersonRow]) -> OutputResult<()>;

    /// Write one step's aggregate statistics row.
    fn write_stat(&mut self, row: &StatRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
