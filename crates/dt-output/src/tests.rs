//! Integration tests for dt-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{PersonRow, StatRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn person_row(index: u32, id: u32) -> PersonRow {
        PersonRow { cycle: 0, step: 5, index, id, x: 1.0, y: 2.0, status: 3, access: 1 }
    }

    fn stat_row(step: u32) -> StatRow {
        StatRow { cycle: 0, step, affected_person: 2, evacuated_person: 1, total_flood: 12.5, max_flood: 0.9 }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("persons.csv").exists());
        assert!(dir.path().join("stats.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("persons.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["Cycle", "Step", "Index", "ID", "X", "Y", "Status", "Access"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("stats.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["Cycle", "Step", "AffectedPerson", "EvacuatedPerson", "TotalFlood", "MaxFlood"]);
    }

    #[test]
    fn csv_person_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![person_row(0, 10), person_row(1, 11), person_row(2, 12)];
        w.write_persons(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("persons.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][3], "10"); // ID
        assert_eq!(&read_rows[1][3], "11");
        assert_eq!(&read_rows[2][3], "12");
    }

    #[test]
    fn csv_stat_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_stat(&stat_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("stats.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][1], "3"); // Step
        assert_eq!(&read_rows[0][2], "2"); // AffectedPerson
        assert_eq!(&read_rows[0][3], "1"); // EvacuatedPerson
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_persons_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_persons(&[]).unwrap(); // should return Ok(())
    }

    #[test]
    fn recorder_reads_coordinator_aggregate() {
        use std::sync::Arc;

        use dt_bus::{InProcessBus, Transport};
        use dt_schedule::{CycleDescriptor, CycleSchedule};
        use dt_sim::CoordinatorBuilder;
        use dt_spatial::{FloodGrid, FloodProvider, SpatialResult};

        use crate::observer::OutputRecorder;

        struct DryFlood;
        impl FloodProvider for DryFlood {
            fn flood_for_step(&self, _step: u32) -> SpatialResult<FloodGrid> {
                Ok(FloodGrid::dry(1.0, 2, 2))
            }
        }

        let bus: Arc<dyn Transport> = Arc::new(InProcessBus::new());
        let schedule = CycleSchedule::new(vec![CycleDescriptor::new(0, 1)]);
        let mut coordinator =
            CoordinatorBuilder::with_shared_transport("u", Arc::clone(&bus), DryFlood, schedule).build();

        coordinator.register("w0", 1).unwrap();

        // announce + step manually, with no worker thread to reply — publish_cycle
        // would block forever, so exercise recorder wiring against an
        // already-started clock instead via direct field access isn't available;
        // this test only checks that an empty aggregate yields no person rows
        // and the step/cycle pairing used by `record_step` is well-formed.
        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut recorder = OutputRecorder::new(writer);
        let stats = dt_bus::payload::StatEntity {
            affected_person: 0,
            evacuated_person: 0,
            total_flood: 0.0,
            max_flood: 0.0,
        };
        recorder.record_step(&coordinator, &stats);
        recorder.finish();
        assert!(recorder.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("stats.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1, "one stat row recorded even with an empty person aggregate");
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::row::{PersonRow, StatRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_person_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let rows = vec![
            PersonRow { cycle: 0, step: 1, index: 0, id: 10, x: 0.0, y: 0.0, status: 1, access: 1 },
            PersonRow { cycle: 0, step: 1, index: 1, id: 11, x: 1.0, y: 1.0, status: 6, access: 0 },
            PersonRow { cycle: 0, step: 1, index: 2, id: 12, x: 2.0, y: 2.0, status: 7, access: 1 },
        ];
        w.write_persons(&rows).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM persons", [], |r| r.get(0)).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_stat_row() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_stat(&StatRow { cycle: 2, step: 7, affected_person: 4, evacuated_person: 9, total_flood: 3.5, max_flood: 1.1 })
            .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (affected, evacuated): (i64, i64) = conn
            .query_row(
                "SELECT affected_person, evacuated_person FROM stats WHERE cycle = 2 AND step = 7",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(affected, 4);
        assert_eq!(evacuated, 9);
    }
}

// ── Parquet tests ─────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "parquet"))]
mod parquet_tests {
    use tempfile::TempDir;

    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    use crate::parquet::ParquetWriter;
    use crate::row::PersonRow;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn parquet_files_created() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert!(dir.path().join("persons.parquet").exists());
        assert!(dir.path().join("stats.parquet").exists());
    }

    #[test]
    fn parquet_person_round_trip() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        let rows = vec![
            PersonRow { cycle: 0, step: 2, index: 0, id: 10, x: 0.0, y: 0.0, status: 1, access: 1 },
            PersonRow { cycle: 0, step: 2, index: 1, id: 11, x: 1.0, y: 1.0, status: 6, access: 0 },
        ];
        w.write_persons(&rows).unwrap();
        w.finish().unwrap();

        let file = std::fs::File::open(dir.path().join("persons.parquet")).unwrap();
        let builder = ParquetRecordBatchReaderBuilder::try_new(file).unwrap();
        let schema = builder.schema().clone();
        let reader = builder.build().unwrap();

        let batches: Vec<_> = reader.map(|b| b.unwrap()).collect();
        let total_rows: usize = batches.iter().map(|b| b.num_rows()).sum();
        assert_eq!(total_rows, 2, "expected 2 rows");

        let field_names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(field_names, ["cycle", "step", "index", "id", "x", "y", "status", "access"]);
    }

    #[test]
    fn parquet_finish_required() {
        // A Parquet file whose writer was NOT closed is invalid (missing footer).
        let dir = tmp();
        {
            let mut w = ParquetWriter::new(dir.path()).unwrap();
            w.write_persons(&[PersonRow { cycle: 0, step: 0, index: 0, id: 0, x: 0.0, y: 0.0, status: 0, access: 0 }])
                .unwrap();
            // Drop without calling finish() — ArrowWriter's Drop will NOT write the footer.
        }

        let file = std::fs::File::open(dir.path().join("persons.parquet")).unwrap();
        let result = ParquetRecordBatchReaderBuilder::try_new(file);
        assert!(result.is_err(), "file without Parquet footer should fail to open");
    }
}
