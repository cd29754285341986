//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `persons` and `stats`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, PersonRow, StatRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn: Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS persons (
                 cycle  INTEGER NOT NULL,
                 step   INTEGER NOT NULL,
                 idx    INTEGER NOT NULL,
                 id     INTEGER NOT NULL,
                 x      REAL NOT NULL,
                 y      REAL NOT NULL,
                 status INTEGER NOT NULL,
                 access INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS stats (
                 cycle            INTEGER NOT NULL,
                 step             INTEGER NOT NULL,
                 affected_person  INTEGER NOT NULL,
                 evacuated_person INTEGER NOT NULL,
                 total_flood      REAL NOT NULL,
                 max_flood        REAL NOT NULL,
                 PRIMARY KEY (cycle, step)
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_persons(&mut self, rows: &[PersonRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO persons (cycle, step, idx, id, x, y, status, access) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.cycle,
                    row.step,
                    row.index,
                    row.id,
                    row.x,
                    row.y,
                    row.status,
                    row.access,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_stat(&mut self, row: &StatRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO stats \
             (cycle, step, affected_person, evacuated_person, total_flood, max_flood) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.cycle,
                row.step,
                row.affected_person,
                row.evacuated_person,
                row.total_flood,
                row.max_flood,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
