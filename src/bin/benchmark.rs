use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use weighted_paths::algorithm::{Dijkstra, ShortestPathAlgorithm};
use weighted_paths::graph::generators::{generate_layered, generate_random};
use weighted_paths::graph::{Graph, WeightedGraph};

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm(
    name: &str,
    algorithm: &Dijkstra,
    graph: &WeightedGraph<usize>,
    source: usize,
) -> weighted_paths::Result<Duration> {
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, source)?;
    let duration = start.elapsed();

    let reachable = result
        .distances()
        .keys()
        .filter(|v| result.is_reachable(v))
        .count();
    let stats = result.stats();
    println!(
        "  - Found {} reachable vertices in {:?} ({} edges examined, early exit: {})",
        reachable, duration, stats.edges_examined, stats.early_exit
    );

    Ok(duration)
}

fn main() -> weighted_paths::Result<()> {
    env_logger::init();

    let graph_sizes = vec![100, 500, 1_000, 2_000, 5_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 2;

    println!("=====================================================");
    println!("Benchmark: Dijkstra with tie tracking");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let with_exit = Dijkstra::new();
    let without_exit = Dijkstra::new().with_early_exit(false);
    let mut rng = StdRng::seed_from_u64(42);

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random(&mut rng, size, size * edge_factor, 10)?;
        println!(
            "Graph has {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let early = benchmark_algorithm("Dijkstra (early exit)", &with_exit, &graph, 0)?;
        let drained = benchmark_algorithm("Dijkstra (drain queue)", &without_exit, &graph, 0)?;
        results.push((size, early, drained));
    }

    println!("\n=====================================================");
    println!("Path enumeration on layered graphs");
    println!("=====================================================");
    for width in [2, 3, 4] {
        let layers = 6;
        let graph = generate_layered(layers, width)?;
        let start = Instant::now();
        let result = graph.shortest_paths_from((0, 0))?;
        let count = result.paths_to(&(layers + 1, 0)).count();
        println!(
            "width {}: {} shortest paths enumerated in {:?}",
            width,
            count,
            start.elapsed()
        );
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<18} | {:<18}",
        "Vertices", "Early exit (us)", "Drain queue (us)"
    );
    println!("-----------------------------------------------------");
    for (size, early, drained) in &results {
        println!(
            "{:<10} | {:<18} | {:<18}",
            size,
            early.as_micros(),
            drained.as_micros()
        );
    }

    Ok(())
}
