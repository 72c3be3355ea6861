//! Global tracing subscriber installation.
//!
//! Mirrors the per-module `spdlog` loggers of the original implementation:
//! one process-wide subscriber, filterable at runtime via `RUST_LOG`,
//! rather than a logger instance threaded through every component.

use tracing_subscriber::EnvFilter;

/// Installs a `tracing-subscriber` `fmt` layer filtered by `RUST_LOG`
/// (default `info` if unset). Call once, at process start.
///
/// Safe to call more than once per process in tests — a failed re-install
/// is silently ignored rather than panicking, since `set_global_default`
/// can only succeed the first time.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
