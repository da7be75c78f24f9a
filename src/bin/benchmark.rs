use std::env;
use std::time::{Duration, Instant};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use puzzle_search::{Bfs, Coord, Dijkstra, Goal, Grid, IdentityCodec, SearchConfig, SearchStats};

/// Open (`true`) / wall (`false`) maze with both corners kept open
fn generate_maze(size: i64, wall_ratio: f64, seed: u64) -> Grid<bool> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut maze = Grid::new();
    for y in 0..size {
        for x in 0..size {
            maze.set((x, y), !rng.gen_bool(wall_ratio));
        }
    }
    maze.set((0, 0), true);
    maze.set((size - 1, size - 1), true);
    maze
}

#[derive(Debug, Serialize)]
struct TrialResult {
    size: i64,
    seed: u64,
    distance: Option<u64>,
    dijkstra_ms: f64,
    bfs_ms: f64,
    dijkstra_stats: SearchStats,
    bfs_stats: SearchStats,
}

fn quiet() -> SearchConfig {
    SearchConfig {
        progress_interval: None,
        ..SearchConfig::default()
    }
}

fn run_trial(size: i64, wall_ratio: f64, seed: u64) -> puzzle_search::Result<TrialResult> {
    let maze = generate_maze(size, wall_ratio, seed);
    let open = |_: &bool, to: &bool| *to;
    let goal: Coord = (size - 1, size - 1);

    let dijkstra = Dijkstra::<u64>::new().with_config(quiet());
    let started = Instant::now();
    let weighted = dijkstra.shortest_path(
        (0, 0),
        Goal::node(goal),
        |c: &Coord| {
            maze.neighbors4_where(*c, open)
                .into_iter()
                .map(|n| (n, 1u64))
        },
        &IdentityCodec,
    )?;
    let dijkstra_time = started.elapsed();

    let bfs = Bfs::new().with_config(quiet());
    let started = Instant::now();
    let unit = bfs.find(
        (0, 0),
        Goal::node(goal),
        |c: &Coord| maze.neighbors4_where(*c, open),
        &IdentityCodec,
    )?;
    let bfs_time = started.elapsed();

    let distance = weighted.as_ref().map(|found| found.distance);
    if distance != unit.as_ref().map(|found| found.distance) {
        warn!("size {} seed {}: Dijkstra and BFS disagree", size, seed);
    }

    Ok(TrialResult {
        size,
        seed,
        distance,
        dijkstra_ms: millis(dijkstra_time),
        bfs_ms: millis(bfs_time),
        dijkstra_stats: weighted.map(|found| found.stats).unwrap_or_default(),
        bfs_stats: unit.map(|found| found.stats).unwrap_or_default(),
    })
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let json = env::args().any(|arg| arg == "--json");
    let sizes: [i64; 5] = [16, 64, 128, 256, 512];
    let trials = 8u64;
    let wall_ratio = 0.25;

    let mut results = Vec::new();
    for &size in &sizes {
        info!("running {} trials on {}x{} mazes", trials, size, size);
        let batch = (0..trials)
            .into_par_iter()
            .map(|trial| run_trial(size, wall_ratio, size as u64 * 1000 + trial))
            .collect::<puzzle_search::Result<Vec<_>>>()?;
        results.extend(batch);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("=====================================================");
    println!("Benchmark: Dijkstra (binary heap) vs BFS (FIFO)");
    println!("Wall ratio: {}, {} trials per size", wall_ratio, trials);
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<15} | {:<15} | {:<10}",
        "Size", "Solved", "Dijkstra (ms)", "BFS (ms)", "Speedup"
    );
    println!("-----------------------------------------------------");

    for &size in &sizes {
        let rows: Vec<&TrialResult> = results.iter().filter(|r| r.size == size).collect();
        let solved = rows.iter().filter(|r| r.distance.is_some()).count();
        let dijkstra_ms = rows.iter().map(|r| r.dijkstra_ms).sum::<f64>() / rows.len() as f64;
        let bfs_ms = rows.iter().map(|r| r.bfs_ms).sum::<f64>() / rows.len() as f64;

        println!(
            "{:<10} | {:<10} | {:<15.3} | {:<15.3} | {:<10.2}",
            format!("{}x{}", size, size),
            format!("{}/{}", solved, rows.len()),
            dijkstra_ms,
            bfs_ms,
            dijkstra_ms / bfs_ms
        );
    }

    Ok(())
}
