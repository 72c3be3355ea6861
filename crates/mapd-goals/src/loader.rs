//! Real-distribution CSV loader.
//!
//! One header line; the first column of each subsequent line is a
//! non-negative integer product id. Frequencies are `count / total`, padded
//! to the group's cargo pool: an id in the pool that never appears in the
//! file gets frequency `0.0`.
//!
//! ```csv
//! product_id
//! 7
//! 7
//! 12
//! ```

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use mapd_core::CargoId;

use crate::error::{GoalsError, GoalsResult};

/// Load empirical frequencies for `cargo_pool` from a CSV file.
///
/// Returns a `Vec<f64>` the same length as `cargo_pool`, in the same order,
/// suitable for [`crate::generator::generate_real`] / [`crate::GoalStream::from_real`].
pub fn load_real_distribution(path: &Path, cargo_pool: &[CargoId]) -> GoalsResult<Vec<f64>> {
    let file = std::fs::File::open(path)?;
    load_real_distribution_reader(file, cargo_pool)
}

/// Like [`load_real_distribution`] but accepts any `Read` source (tests pass
/// a `std::io::Cursor`).
pub fn load_real_distribution_reader<R: Read>(
    reader: R,
    cargo_pool: &[CargoId],
) -> GoalsResult<Vec<f64>> {
    let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut counts: HashMap<u32, u64> = HashMap::new();
    let mut total: u64 = 0;

    for (row_idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        let raw = record.get(0).unwrap_or("").trim();
        let id: u32 = raw
            .parse()
            .map_err(|_| GoalsError::InvalidProductId(row_idx, raw.to_string()))?;
        *counts.entry(id).or_insert(0) += 1;
        total += 1;
    }

    if total == 0 {
        return Err(GoalsError::EmptyDistribution);
    }

    let frequencies = cargo_pool
        .iter()
        .map(|&cargo| counts.get(&cargo.0).copied().unwrap_or(0) as f64 / total as f64)
        .collect();

    Ok(frequencies)
}
