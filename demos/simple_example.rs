use weighted_paths::graph::{Graph, MutableGraph};
use weighted_paths::{Dijkstra, ShortestPathAlgorithm, WeightedGraph};

fn main() -> weighted_paths::Result<()> {
    env_logger::init();

    // Create a simple directed graph
    let mut graph: WeightedGraph<&str> = WeightedGraph::new();

    // Add edges with weights
    graph.add_edge("home", "bakery", 4)?;
    graph.add_edge("home", "park", 2)?;
    graph.add_edge("park", "bakery", 2)?;
    graph.add_edge("bakery", "office", 3)?;
    graph.add_edge("park", "library", 1)?;
    graph.add_edge("library", "office", 4)?;
    graph.add_edge("office", "home", 7)?;
    graph.add_edge("museum", "home", 1)?;

    let source = "home";

    println!("--- Testing on a simple graph ---");
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, source)?;

    println!(
        "\n{} algorithm results:",
        <Dijkstra as ShortestPathAlgorithm<&str, u64, WeightedGraph<&str>>>::name(&dijkstra)
    );

    let mut vertices: Vec<&str> = graph.known_vertices().copied().collect();
    vertices.sort();
    for v in vertices {
        match result.distance(&v) {
            None => println!("  {}: unreachable", v),
            Some(dist) => {
                println!("  {}: distance = {}", v, dist);
                for path in result.paths_to(&v) {
                    println!("      via {}", path.join(" -> "));
                }
            }
        }
    }

    let stats = result.stats();
    println!(
        "\nSettled {} vertices, examined {} edges",
        stats.settled, stats.edges_examined
    );

    Ok(())
}
