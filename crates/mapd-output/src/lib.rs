//! `mapd-output` — simulation output writers: the "file I/O for statistics
//! and traces" external collaborator.
//!
//! Three backends are provided behind Cargo features, each implementing
//! three append-only sinks:
//!
//! | Feature   | Backend     | Files created                                     |
//! |-----------|-------------|----------------------------------------------------|
//! | *(none)*  | CSV         | `steps.csv`, `throughput.csv`, `summary.csv`       |
//! | `sqlite`  | SQLite      | `output.db`                                        |
//! | `parquet` | Parquet     | `steps.parquet`, `throughput.parquet`, `summary.parquet` |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `mapd_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mapd_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{StepRow, SummaryRow, ThroughputRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
