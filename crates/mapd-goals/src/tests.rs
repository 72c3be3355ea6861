//! Unit tests for mapd-goals.

use std::io::Cursor;

use mapd_cache::{Cache, EvictionPolicy};
use mapd_core::{CargoId, SimRng, VertexId};

use crate::generator::{generate_mk, zhang_probabilities};
use crate::loader::load_real_distribution_reader;
use crate::GoalStream;

fn pool(ids: &[u32]) -> Vec<CargoId> {
    ids.iter().map(|&i| CargoId(i)).collect()
}

/// A single-slot cache that reports a cache hit for exactly one cargo id,
/// via a real `try_insert`/`commit_insert` round-trip (so `remaining > 0`
/// and `look_ahead_hit` is genuinely true, not just seeded test state).
fn cache_hit_only_on(cargo: CargoId) -> Cache {
    let mut cache = Cache::new(vec![VertexId(0)], EvictionPolicy::Lru, 2);
    let outcome = cache.try_insert(cargo);
    let cell = match outcome {
        mapd_cache::InsertOutcome::Reserved { cell, .. } => cell,
        mapd_cache::InsertOutcome::Rejected => panic!("expected a reservation on an empty cache"),
    };
    cache.commit_insert(cargo, cell).unwrap();
    cache
}

fn empty_cache() -> Cache {
    Cache::new(vec![VertexId(0)], EvictionPolicy::Lru, 2)
}

// ── GoalStream::next_goal ────────────────────────────────────────────────────

#[test]
fn scenario_4_look_ahead_reorder() {
    // Q=[A,B,C], delays=[0,0,0], look_ahead=3, cache hits B.
    // next_goal returns B; Q becomes [A,C] with delays [1,1].
    let [a, b, c] = [CargoId(0), CargoId(1), CargoId(2)];
    let cache = cache_hit_only_on(b);
    let mut rng = SimRng::new(1);
    let mut goals = GoalStream::from_parts(pool(&[0, 1, 2]), vec![a, b, c], vec![0, 0, 0]);

    let selected = goals.next_goal(3, 100, &cache, &mut rng);

    assert_eq!(selected, b);
    assert_eq!(goals.queue_snapshot(), vec![a, c]);
    assert_eq!(goals.delay_snapshot(), vec![1, 1]);
}

#[test]
fn scenario_5_starvation_bound() {
    // Q=[A,B], cache hits only on B, delay_deadline=2: three next_goal calls
    // should return B,B,A. A two-element FIFO
    // queue cannot reproduce that literally: once B is popped and selected
    // it is gone, so a second B could never come up again. Q=[A,B,B] with
    // look_ahead=2 reproduces the named B,B,A sequence exactly and is used
    // here as the faithful seed fixture (see DESIGN.md).
    let [a, b] = [CargoId(0), CargoId(1)];
    let cache = cache_hit_only_on(b);
    let mut rng = SimRng::new(7);
    let mut goals = GoalStream::from_parts(pool(&[0, 1]), vec![a, b, b], vec![0, 0, 0]);

    let first = goals.next_goal(2, 2, &cache, &mut rng);
    let second = goals.next_goal(2, 2, &cache, &mut rng);
    let third = goals.next_goal(2, 2, &cache, &mut rng);

    assert_eq!(first, b);
    assert_eq!(second, b);
    assert_eq!(third, a);
}

#[test]
fn empty_queue_falls_back_to_uniform_cargo_pool() {
    let cache = empty_cache();
    let mut rng = SimRng::new(3);
    let mut goals = GoalStream::from_parts(pool(&[0, 1, 2]), vec![], vec![]);

    for _ in 0..20 {
        let goal = goals.next_goal(4, 10, &cache, &mut rng);
        assert!([CargoId(0), CargoId(1), CargoId(2)].contains(&goal));
    }
}

#[test]
fn no_match_in_window_falls_back_to_head() {
    // No window entry is a cache hit and none has reached delay_deadline:
    // next_goal serves the head (index 0) rather than stalling.
    let [a, b, c] = [CargoId(0), CargoId(1), CargoId(2)];
    let cache = empty_cache();
    let mut rng = SimRng::new(11);
    let mut goals = GoalStream::from_parts(pool(&[0, 1, 2]), vec![a, b, c], vec![0, 0, 0]);

    let selected = goals.next_goal(3, 100, &cache, &mut rng);

    assert_eq!(selected, a);
    assert_eq!(goals.queue_snapshot(), vec![b, c]);
    assert_eq!(goals.delay_snapshot(), vec![1, 1]);
}

#[test]
fn look_ahead_caps_at_queue_length() {
    let a = CargoId(0);
    let cache = empty_cache();
    let mut rng = SimRng::new(13);
    let mut goals = GoalStream::from_parts(pool(&[0]), vec![a], vec![0]);

    // look_ahead of 10 on a 1-element queue must not panic or read past it.
    let selected = goals.next_goal(10, 5, &cache, &mut rng);
    assert_eq!(selected, a);
    assert!(goals.is_empty());
}

// ── generate_mk ───────────────────────────────────────────────────────────────

#[test]
fn mk_window_never_exceeds_k_distinct_values() {
    let pool_ids = pool(&(0..20).collect::<Vec<u32>>());
    let mut rng = SimRng::new(42);
    let goals = generate_mk(&pool_ids, 500, 5, 2, &mut rng);

    for window in goals.windows(5) {
        let mut distinct: Vec<CargoId> = Vec::new();
        for &g in window {
            if !distinct.contains(&g) {
                distinct.push(g);
            }
        }
        assert!(
            distinct.len() <= 2,
            "window {window:?} has {} distinct values, expected <= 2",
            distinct.len()
        );
    }
}

#[test]
fn mk_with_window_larger_than_k_still_bounded() {
    let pool_ids = pool(&[0, 1, 2, 3, 4, 5, 6, 7]);
    let mut rng = SimRng::new(99);
    let goals = generate_mk(&pool_ids, 200, 10, 3, &mut rng);
    assert_eq!(goals.len(), 200);
    for window in goals.windows(10) {
        let mut distinct: Vec<CargoId> = Vec::new();
        for &g in window {
            if !distinct.contains(&g) {
                distinct.push(g);
            }
        }
        assert!(distinct.len() <= 3);
    }
}

// ── zhang_probabilities ───────────────────────────────────────────────────────

#[test]
fn zhang_probabilities_sum_to_one() {
    let probs = zhang_probabilities(100);
    let sum: f64 = probs.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9, "sum was {sum}");
}

#[test]
fn zhang_probabilities_class_totals() {
    // n=100 -> a_len=10 (0.7 total), b_len=20 (0.2 total), c_len=70 (0.1 total).
    let probs = zhang_probabilities(100);
    let a_sum: f64 = probs[0..10].iter().sum();
    let b_sum: f64 = probs[10..30].iter().sum();
    let c_sum: f64 = probs[30..100].iter().sum();
    assert!((a_sum - 0.7).abs() < 1e-9, "a_sum={a_sum}");
    assert!((b_sum - 0.2).abs() < 1e-9, "b_sum={b_sum}");
    assert!((c_sum - 0.1).abs() < 1e-9, "c_sum={c_sum}");
}

#[test]
fn zhang_probabilities_monotonically_decreasing() {
    let probs = zhang_probabilities(50);
    for pair in probs.windows(2) {
        assert!(pair[0] >= pair[1] - 1e-12, "not decreasing: {pair:?}");
    }
}

#[test]
fn zhang_probabilities_boundary_continuity() {
    // a_len=1, b_len=2 for n=10 (0.1*10=1, 0.2*10=2): the boundary item of B
    // is pinned equal to A's only (last) item.
    let probs = zhang_probabilities(10);
    let a_len = 1;
    assert!((probs[a_len] - probs[a_len - 1]).abs() < 1e-9);
}

#[test]
fn zhang_probabilities_empty_pool() {
    assert!(zhang_probabilities(0).is_empty());
}

// ── Real-distribution loader ──────────────────────────────────────────────────

#[test]
fn real_distribution_frequencies() {
    let csv = b"product_id\n7\n7\n7\n12\n";
    let pool_ids = pool(&[7, 12, 99]);
    let freqs = load_real_distribution_reader(Cursor::new(csv.as_slice()), &pool_ids).unwrap();

    assert!((freqs[0] - 0.75).abs() < 1e-9); // 3/4
    assert!((freqs[1] - 0.25).abs() < 1e-9); // 1/4
    assert_eq!(freqs[2], 0.0); // 99 never appears
}

#[test]
fn real_distribution_empty_file_errors() {
    let csv = b"product_id\n";
    let pool_ids = pool(&[1, 2]);
    let result = load_real_distribution_reader(Cursor::new(csv.as_slice()), &pool_ids);
    assert!(result.is_err());
}

#[test]
fn real_distribution_invalid_id_errors() {
    let csv = b"product_id\nnot-a-number\n";
    let pool_ids = pool(&[1, 2]);
    let result = load_real_distribution_reader(Cursor::new(csv.as_slice()), &pool_ids);
    assert!(result.is_err());
}
