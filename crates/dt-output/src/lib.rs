//! `dt-output` — simulation output writers for the rust_dt framework.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend     | Files created                          |
//! |-----------|-------------|------------------------------------------|
//! | *(none)*  | CSV         | `persons.csv`, `stats.csv`               |
//! | `sqlite`  | SQLite      | `output.db`                              |
//! | `parquet` | Parquet     | `persons.parquet`, `stats.parquet`       |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`OutputRecorder`], which reads a `dt_sim::Coordinator`'s per-step
//! aggregate after each `publish_step` call.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dt_output::{CsvWriter, OutputRecorder};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut recorder = OutputRecorder::new(writer);
//! let stats = coordinator.publish_step()?;
//! recorder.record_step(&coordinator, &stats);
//! recorder.finish();
//! recorder.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::OutputRecorder;
pub use row::{PersonRow, StatRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
