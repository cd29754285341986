//! Parquet output backend (feature `parquet`).
//!
//! Creates two files in the configured output directory:
//! - `persons.parquet`
//! - `stats.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Float32Builder, Float64Builder, Int32Builder, UInt32Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{OutputResult, PersonRow, StatRow};

fn person_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("cycle", DataType::UInt64, false),
        Field::new("step", DataType::UInt32, false),
        Field::new("index", DataType::UInt32, false),
        Field::new("id", DataType::UInt32, false),
        Field::new("x", DataType::Float32, false),
        Field::new("y", DataType::Float32, false),
        Field::new("status", DataType::Int32, false),
        Field::new("access", DataType::Int32, false),
    ]))
}

fn stat_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("cycle", DataType::UInt64, false),
        Field::new("step", DataType::UInt32, false),
        Field::new("affected_person", DataType::UInt64, false),
        Field::new("evacuated_person", DataType::UInt64, false),
        Field::new("total_flood", DataType::Float64, false),
        Field::new("max_flood", DataType::Float64, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder().set_compression(Compression::SNAPPY).build()
}

/// Writes simulation output to two Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footer; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    persons: Option<ArrowWriter<File>>,
    stats: Option<ArrowWriter<File>>,
    person_schema: Arc<Schema>,
    stat_schema: Arc<Schema>,
}

impl ParquetWriter {
    /// Create both Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let person_schema = person_schema();
        let stat_schema = stat_schema();

        let person_file = File::create(dir.join("persons.parquet"))?;
        let persons = ArrowWriter::try_new(person_file, Arc::clone(&person_schema), Some(snappy_props()))?;

        let stat_file = File::create(dir.join("stats.parquet"))?;
        let stats = ArrowWriter::try_new(stat_file, Arc::clone(&stat_schema), Some(snappy_props()))?;

        Ok(Self {
            persons: Some(persons),
            stats: Some(stats),
            person_schema,
            stat_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_persons(&mut self, rows: &[PersonRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.persons.as_mut() else {
            return Ok(());
        };

        let mut cycles = UInt64Builder::new();
        let mut steps = UInt32Builder::new();
        let mut indices = UInt32Builder::new();
        let mut ids = UInt32Builder::new();
        let mut xs = Float32Builder::new();
        let mut ys = Float32Builder::new();
        let mut statuses = Int32Builder::new();
        let mut accesses = Int32Builder::new();

        for row in rows {
            cycles.append_value(row.cycle);
            steps.append_value(row.step);
            indices.append_value(row.index);
            ids.append_value(row.id);
            xs.append_value(row.x);
            ys.append_value(row.y);
            statuses.append_value(row.status);
            accesses.append_value(row.access);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.person_schema),
            vec![
                Arc::new(cycles.finish()),
                Arc::new(steps.finish()),
                Arc::new(indices.finish()),
                Arc::new(ids.finish()),
                Arc::new(xs.finish()),
                Arc::new(ys.finish()),
                Arc::new(statuses.finish()),
                Arc::new(accesses.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_stat(&mut self, row: &StatRow) -> OutputResult<()> {
        let Some(writer) = self.stats.as_mut() else {
            return Ok(());
        };

        let mut cycles = UInt64Builder::new();
        let mut steps = UInt32Builder::new();
        let mut affected = UInt64Builder::new();
        let mut evacuated = UInt64Builder::new();
        let mut total_flood = Float64Builder::new();
        let mut max_flood = Float64Builder::new();

        cycles.append_value(row.cycle);
        steps.append_value(row.step);
        affected.append_value(row.affected_person);
        evacuated.append_value(row.evacuated_person);
        total_flood.append_value(row.total_flood);
        max_flood.append_value(row.max_flood);

        let batch = RecordBatch::try_new(
            Arc::clone(&self.stat_schema),
            vec![
                Arc::new(cycles.finish()),
                Arc::new(steps.finish()),
                Arc::new(affected.finish()),
                Arc::new(evacuated.finish()),
                Arc::new(total_flood.finish()),
                Arc::new(max_flood.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.persons.take() {
            w.close()?;
        }
        if let Some(w) = self.stats.take() {
            w.close()?;
        }
        Ok(())
    }
}
