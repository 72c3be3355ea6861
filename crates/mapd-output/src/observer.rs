//! `SimOutputObserver<W>` — bridges `mapd_sim::SimObserver` to an
//! [`OutputWriter`].

use mapd_core::Tick;
use mapd_instance::Stats;
use mapd_sim::SimObserver;

use crate::row::{StepRow, SummaryRow, ThroughputRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Default cadence for the throughput log.
const DEFAULT_THROUGHPUT_PERIOD: u64 = 200;

/// A [`SimObserver`] that writes the step log, the sampled throughput log,
/// and the end-of-run summary row to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value. After the run returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:            W,
    throughput_period: u64,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, sampling throughput every 200
    /// ticks.
    pub fn new(writer: W) -> Self {
        Self::with_throughput_period(writer, DEFAULT_THROUGHPUT_PERIOD)
    }

    /// Create an observer with a custom throughput-sampling cadence.
    pub fn with_throughput_period(writer: W, throughput_period: u64) -> Self {
        Self { writer, throughput_period, last_error: None }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, reached: u32, stats: &Stats) {
        let row = StepRow {
            tick:         tick.0,
            reached,
            remain_goals: stats.remain_goals,
            cache_access: stats.cache_access,
            cache_hit:    stats.cache_hit,
        };
        let result = self.writer.write_step(&row);
        self.store_err(result);

        if tick.is_multiple_of(self.throughput_period) {
            let row = ThroughputRow {
                tick:           tick.0,
                completed:      stats.completed,
                remain_goals:   stats.remain_goals,
                cache_hit_rate: stats.cache_hit_rate(),
            };
            let result = self.writer.write_throughput(&row);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick, stats: &Stats, success: bool) {
        let row = SummaryRow {
            cache_hit_rate: stats.cache_hit_rate(),
            makespan:       final_tick.0,
            p0:             stats.percentile(0.0),
            p50:            stats.percentile(50.0),
            p99:            stats.percentile(99.0),
            success,
        };
        let result = self.writer.write_summary(&row);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
