//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `steps`, `throughput`, and `summary`.

use std::path::Path;

use rusqlite::Connection;

use crate::row::{StepRow, SummaryRow, ThroughputRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS steps (
                 tick         INTEGER PRIMARY KEY,
                 reached      INTEGER NOT NULL,
                 remain_goals INTEGER NOT NULL,
                 cache_access INTEGER NOT NULL,
                 cache_hit    INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS throughput (
                 tick            INTEGER PRIMARY KEY,
                 completed       INTEGER NOT NULL,
                 remain_goals    INTEGER NOT NULL,
                 cache_hit_rate  REAL NOT NULL
             );
             CREATE TABLE IF NOT EXISTS summary (
                 cache_hit_rate REAL NOT NULL,
                 makespan       INTEGER NOT NULL,
                 p0             INTEGER NOT NULL,
                 p50            INTEGER NOT NULL,
                 p99            INTEGER NOT NULL,
                 success        INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_step(&mut self, row: &StepRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO steps (tick, reached, remain_goals, cache_access, cache_hit) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![row.tick, row.reached, row.remain_goals, row.cache_access, row.cache_hit],
        )?;
        Ok(())
    }

    fn write_throughput(&mut self, row: &ThroughputRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO throughput (tick, completed, remain_goals, cache_hit_rate) \
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![row.tick, row.completed, row.remain_goals, row.cache_hit_rate],
        )?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO summary (cache_hit_rate, makespan, p0, p50, p99, success) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![row.cache_hit_rate, row.makespan, row.p0, row.p50, row.p99, row.success as i64],
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
