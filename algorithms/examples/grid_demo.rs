//! Runs the pathfinder on the fixed 3x3 demo grid and builds a spanning tree.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example grid_demo

use algorithms::computation_map::ALGORITHMS_COMPUTATION_MAP;
use algorithms::graph::{build_mst, MstStrategy, WeightedGraph};
use algorithms::pathfinding::find_path;
use algorithms::pathfinding::grid::{find_goal, find_start, parse_grid};
use tracing_subscriber::EnvFilter;

const DEMO_GRID: &str = "
    S#.
    .#.
    ..G
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Algorithms Computation Map ===");
    for (path, kind, determinism) in ALGORITHMS_COMPUTATION_MAP.iter() {
        println!("{:<30} | {:<22} | {:?}", path, kind, determinism);
    }

    // ── 1. A* on the demo grid ───────────────────────────────────────────────
    // walls at (1,0) and (1,1); expected [(0,0),(0,1),(0,2),(1,2),(2,2)]
    let cells = parse_grid(DEMO_GRID)?;
    let start = find_start(&cells).ok_or("demo grid has no start")?;
    let goal = find_goal(&cells).ok_or("demo grid has no goal")?;
    match find_path(start, goal, &cells)? {
        Some(path) => println!("\nA* path: {:?}", path),
        None => println!("\nA* path: none"),
    }

    // ── 2. Spanning trees ────────────────────────────────────────────────────
    let graph: WeightedGraph<&str, u32> = [
        ("A", "B", 2),
        ("A", "C", 3),
        ("B", "C", 1),
        ("B", "D", 1),
        ("C", "D", 4),
    ]
    .into_iter()
    .collect();
    for strategy in [MstStrategy::Kruskal, MstStrategy::Prim] {
        let tree = build_mst(&graph, strategy)?;
        println!("{strategy} MST (weight {}): {:?}", tree.total_weight(), tree.edges());
    }
    Ok(())
}
