//! The `OutputWriter` trait implemented by all backend writers.

use crate::row::{StepRow, SummaryRow, ThroughputRow};
use crate::OutputResult;

/// Trait implemented by CSV, SQLite, and Parquet writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with [`SimOutputObserver::take_error`],
/// since `mapd_sim::SimObserver`'s callbacks have no return value.
pub trait OutputWriter {
    /// Append one per-tick step row.
    fn write_step(&mut self, row: &StepRow) -> OutputResult<()>;

    /// Append one throughput row, sampled every 200 ticks by the caller.
    fn write_throughput(&mut self, row: &ThroughputRow) -> OutputResult<()>;

    /// Write the single end-of-run summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
