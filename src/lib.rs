//! Weighted Paths - single-source shortest paths that remember every tie
//!
//! This library computes Dijkstra distances over an explicit, directed graph of
//! arbitrary hashable vertex values. Unlike a classic shortest-path tree, it keeps
//! the full set of predecessors for every vertex that lie on *some* shortest path,
//! so every distinct shortest path to a target can be enumerated afterwards.
//!
//! ```
//! use weighted_paths::graph::MutableGraph;
//! use weighted_paths::WeightedGraph;
//!
//! let mut graph: WeightedGraph<&str> = WeightedGraph::new();
//! graph.add_edge("A", "B", 1).unwrap();
//! graph.add_edge("A", "C", 1).unwrap();
//! graph.add_edge("B", "D", 1).unwrap();
//! graph.add_edge("C", "D", 1).unwrap();
//!
//! let result = graph.shortest_paths_from("A").unwrap();
//! assert_eq!(result.distance(&"D"), Some(2));
//! assert_eq!(result.paths_to(&"D").count(), 2);
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra,
    distance_map::{DistanceMap, Paths, SearchStats},
    ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::{Edge, WeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid edge weight: {0} (weights must be non-negative)")]
    InvalidWeight(String),

    #[error("Priority queue is empty")]
    EmptyQueue,

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
