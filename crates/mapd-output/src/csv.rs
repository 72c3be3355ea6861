//! CSV output backend.
//!
//! Creates three append-only files in the configured output directory:
//! - `steps.csv`
//! - `throughput.csv`
//! - `summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::row::{StepRow, SummaryRow, ThroughputRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    steps:      Writer<File>,
    throughput: Writer<File>,
    summary:    Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut steps = Writer::from_path(dir.join("steps.csv"))?;
        steps.write_record(["tick", "reached", "remain_goals", "cache_access", "cache_hit"])?;

        let mut throughput = Writer::from_path(dir.join("throughput.csv"))?;
        throughput.write_record(["tick", "completed", "remain_goals", "cache_hit_rate"])?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record(["cache_hit_rate", "makespan", "p0", "p50", "p99", "success"])?;

        Ok(Self { steps, throughput, summary, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_step(&mut self, row: &StepRow) -> OutputResult<()> {
        self.steps.write_record(&[
            row.tick.to_string(),
            row.reached.to_string(),
            row.remain_goals.to_string(),
            row.cache_access.to_string(),
            row.cache_hit.to_string(),
        ])?;
        Ok(())
    }

    fn write_throughput(&mut self, row: &ThroughputRow) -> OutputResult<()> {
        self.throughput.write_record(&[
            row.tick.to_string(),
            row.completed.to_string(),
            row.remain_goals.to_string(),
            row.cache_hit_rate.to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.cache_hit_rate.to_string(),
            row.makespan.to_string(),
            row.p0.to_string(),
            row.p50.to_string(),
            row.p99.to_string(),
            row.success.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.steps.flush()?;
        self.throughput.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
