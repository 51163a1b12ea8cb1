use crate::algorithm::DistanceMap;
use crate::graph::{Graph, Vertex, Weight};
use crate::Result;

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<T, W, G>
where
    T: Vertex,
    W: Weight,
    G: Graph<T, W>,
{
    /// Compute distances and every tying predecessor from a start vertex
    fn compute_shortest_paths(&self, graph: &G, start: T) -> Result<DistanceMap<T, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
