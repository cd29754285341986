//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `persons.csv`
//! - `stats.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PersonRow, StatRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    persons: Writer<File>,
    stats: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut persons = Writer::from_path(dir.join("persons.csv"))?;
        persons.write_record(["Cycle", "Step", "Index", "ID", "X", "Y", "Status", "Access"])?;

        let mut stats = Writer::from_path(dir.join("stats.csv"))?;
        stats.write_record(["Cycle", "Step", "AffectedPerson", "EvacuatedPerson", "TotalFlood", "MaxFlood"])?;

        Ok(Self { persons, stats, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_persons(&mut self, rows: &[PersonRow]) -> OutputResult<()> {
        for row in rows {
            self.persons.write_record(&[
                row.cycle.to_string(),
                row.step.to_string(),
                row.index.to_string(),
                row.id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.status.to_string(),
                row.access.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_stat(&mut self, row: &StatRow) -> OutputResult<()> {
        self.stats.write_record(&[
            row.cycle.to_string(),
            row.step.to_string(),
            row.affected_person.to_string(),
            row.evacuated_person.to_string(),
            row.total_flood.to_string(),
            row.max_flood.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.persons.flush()?;
        self.stats.flush()?;
        Ok(())
    }
}
