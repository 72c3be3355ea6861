//! `warehouse_sim` — a runnable end-to-end demonstration of the cache-aware
//! MAPD controller: a single warehouse group, a small fleet of agents, and
//! a fixed demand stream, run to completion with CSV output.
//!
//! Configuration is hardcoded (argument parsing is explicitly out of scope
//! here) — copy `main` and adjust `CONFIG` to try other scales.

use std::io::Cursor;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use mapd_core::{CacheType, Config, GoalsGen};
use mapd_grid::load_map;
use mapd_output::{CsvWriter, SimOutputObserver};
use mapd_planner::GreedyStepPlanner;
use mapd_sim::SimBuilder;

/// Two groups sharing one coordinate space: each has a port (`U`), a row of
/// warehouse cells (`H`), and a cache cell (`C`) across an aisle (`.`). An
/// opening in the group-2 wall row keeps an aisle column passable between
/// the two groups' rows, so an agent's (globally sampled) start position is
/// never stranded away from its assigned group's cells.
const MAP: &str = "\
type single_port
group 2
height 6
width 7
map
TTTTTTT
U..H..T
T..H..C

T.TTTTT
U..H..T
T..H..C

";

const AGENT_COUNT: u32 = 4;
const GOAL_COUNT: u32 = 40;

fn main() -> Result<()> {
    mapd_sim::init_tracing();

    let config = Config {
        map_file: PathBuf::from("<embedded>"),
        cache_type: CacheType::Lru,
        look_ahead: 3,
        delay_deadline: 5,
        num_goals: GOAL_COUNT,
        num_agents: AGENT_COUNT,
        agent_capacity: 2,
        goals_gen: GoalsGen::Mk,
        goals_m: 3,
        goals_k: 2,
        real_dist_file: None,
        random_seed: 42,
        time_limit_sec: 30.0,
        optimization: true,
    };

    tracing::info!(agents = AGENT_COUNT, goals = GOAL_COUNT, "building instance");
    let grid = load_map(Cursor::new(MAP))?;

    let mut sim = SimBuilder::new(config, grid, GreedyStepPlanner).build()?;

    std::fs::create_dir_all("output/warehouse_sim")?;
    let writer = CsvWriter::new(std::path::Path::new("output/warehouse_sim"))?;
    let mut observer = SimOutputObserver::new(writer);

    let t0 = Instant::now();
    let result = sim.run(&mut observer);
    let elapsed = t0.elapsed();

    if let Some(err) = observer.take_error() {
        eprintln!("output error: {err}");
    }

    result?;

    let stats = &sim.instance.stats;
    println!("=== warehouse_sim complete in {:.3}s ===", elapsed.as_secs_f64());
    println!("ticks elapsed    : {}", sim.tick);
    println!("deliveries       : {}", stats.completed);
    println!("cache hit rate   : {:.3}", stats.cache_hit_rate());
    println!("p0/p50/p99 steps : {}/{}/{}", stats.percentile(0.0), stats.percentile(50.0), stats.percentile(99.0));
    println!("output written to output/warehouse_sim/{{steps,throughput,summary}}.csv");

    Ok(())
}
