//! Pure goal-sequence generators.
//!
//! Each function fills a queue of `length` cargo goals for a group's cargo
//! pool `C_g`. They are pure with respect to everything except the supplied
//! RNG, so they're trivially testable without constructing a full
//! [`crate::GoalStream`].

use std::collections::VecDeque;

use mapd_core::{CargoId, SimRng};

/// MK(m, k) bounded-diversity generator.
///
/// Maintains a sliding window of the last `m` pushed goals. Each step draws a
/// candidate uniformly from `cargo_pool`; if the window already contains `k`
/// distinct goals, the candidate is replaced by a uniform choice among that
/// distinct set, forcing temporal locality.
pub fn generate_mk(
    cargo_pool: &[CargoId],
    length: usize,
    m: usize,
    k: usize,
    rng: &mut SimRng,
) -> Vec<CargoId> {
    assert!(!cargo_pool.is_empty(), "cargo pool must be non-empty");

    let mut window: VecDeque<CargoId> = VecDeque::with_capacity(m);
    let mut out = Vec::with_capacity(length);

    for _ in 0..length {
        let mut candidate = cargo_pool[rng.gen_range(0..cargo_pool.len())];

        if m > 0 && k > 0 {
            let mut distinct: Vec<CargoId> = Vec::new();
            for &w in &window {
                if !distinct.contains(&w) {
                    distinct.push(w);
                }
            }
            if distinct.len() >= k {
                candidate = *rng
                    .choose(&distinct)
                    .expect("distinct window non-empty when k>0");
            }
        }

        out.push(candidate);

        if m > 0 {
            window.push_back(candidate);
            if window.len() > m {
                window.pop_front();
            }
        }
    }

    out
}

/// Computes the per-item draw probability for the Zhang A/B/C harmonic
/// classification, in `cargo_pool` order.
///
/// Items are split into A-class (first 10%), B-class (next 20%), and C-class
/// (the remaining 70%), carrying total probability mass 0.7 / 0.2 / 0.1
/// respectively. Within a class, probability decreases harmonically
/// (`∝ 1/rank`). The first item of B is pinned equal to the last item of A,
/// and the first item of C pinned equal to the last item of B, so probability
/// is continuous across class boundaries; the remaining items of the class
/// absorb what's left of that class's mass, scaled harmonically.
pub fn zhang_probabilities(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }

    let a_len = (((n as f64) * 0.1).round() as usize).min(n);
    let b_len = (((n as f64) * 0.2).round() as usize).min(n - a_len);
    let c_len = n - a_len - b_len;

    let mut probs = Vec::with_capacity(n);

    if a_len > 0 {
        probs.extend(harmonic_decreasing(a_len, 0.7));
    }
    let a_last = probs.last().copied();

    if b_len > 0 {
        let class = match a_last {
            Some(pin) => harmonic_decreasing_pinned(b_len, 0.2, pin),
            None => harmonic_decreasing(b_len, 0.2),
        };
        probs.extend(class);
    }
    let b_last = probs.last().copied();

    if c_len > 0 {
        let pin = b_last.or(a_last);
        let class = match pin {
            Some(pin) => harmonic_decreasing_pinned(c_len, 0.1, pin),
            None => harmonic_decreasing(c_len, 0.1),
        };
        probs.extend(class);
    }

    probs
}

fn harmonic_decreasing(n: usize, total: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let weights: Vec<f64> = (1..=n).map(|i| 1.0 / i as f64).collect();
    let sum_w: f64 = weights.iter().sum();
    weights.iter().map(|w| total * w / sum_w).collect()
}

/// Like [`harmonic_decreasing`] but the first item is pinned to
/// `pinned_first` and the remaining `n - 1` items harmonically share what's
/// left of `total`.
fn harmonic_decreasing_pinned(n: usize, total: f64, pinned_first: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![total];
    }
    let residual = (total - pinned_first).max(0.0);
    let mut out = Vec::with_capacity(n);
    out.push(pinned_first);
    out.extend(harmonic_decreasing(n - 1, residual));
    out
}

/// Draws `length` iid goals from `cargo_pool` under the discrete
/// distribution `probs` (same length as `cargo_pool`, summing to ~1.0).
fn draw_weighted(cargo_pool: &[CargoId], probs: &[f64], length: usize, rng: &mut SimRng) -> Vec<CargoId> {
    assert_eq!(cargo_pool.len(), probs.len());
    let mut cumulative = Vec::with_capacity(probs.len());
    let mut running = 0.0;
    for &p in probs {
        running += p;
        cumulative.push(running);
    }

    let upper = if running > 0.0 { running } else { 1.0 };
    (0..length)
        .map(|_| {
            let x: f64 = rng.gen_range(0.0..upper);
            let idx = cumulative
                .iter()
                .position(|&c| x < c)
                .unwrap_or(cargo_pool.len() - 1);
            cargo_pool[idx]
        })
        .collect()
}

/// Zhang A/B/C harmonic-weighted generator.
pub fn generate_zhang(cargo_pool: &[CargoId], length: usize, rng: &mut SimRng) -> Vec<CargoId> {
    assert!(!cargo_pool.is_empty(), "cargo pool must be non-empty");
    let probs = zhang_probabilities(cargo_pool.len());
    draw_weighted(cargo_pool, &probs, length, rng)
}

/// Real empirical-frequency generator.
///
/// `frequencies` must be the same length as `cargo_pool`, one empirical
/// frequency per pool item (see [`crate::loader::load_real_distribution`]).
pub fn generate_real(
    cargo_pool: &[CargoId],
    frequencies: &[f64],
    length: usize,
    rng: &mut SimRng,
) -> Vec<CargoId> {
    assert!(!cargo_pool.is_empty(), "cargo pool must be non-empty");
    draw_weighted(cargo_pool, frequencies, length, rng)
}
