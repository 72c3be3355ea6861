//! Simulation observer trait for progress reporting and data collection.

use mapd_core::Tick;
use mapd_instance::Stats;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, reached: u32, stats: &Stats) {
///         println!("tick {tick}: {reached} goals reached, {} remaining", stats.remain_goals);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after each tick's planner invocation and `AgentState` sweep.
    ///
    /// `reached` is the number of deliveries completed this tick.
    fn on_tick_end(&mut self, _tick: Tick, _reached: u32, _stats: &Stats) {}

    /// Called once after the run ends, whether by exhausting all goals or
    /// by a planner failure (`success = false` in the latter case).
    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &Stats, _success: bool) {}
}

/// A [`SimObserver`] that does nothing. Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
