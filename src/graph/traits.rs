use std::fmt::Debug;
use std::hash::Hash;

use num_traits::PrimInt;

use crate::graph::Edge;
use crate::Result;

/// Values usable as graph vertices.
///
/// The engine never looks inside a vertex; it only compares, hashes and clones it.
/// `Debug` is also required: vertices appear in log output and in the queue's
/// debug assertions. Any type deriving these four traits qualifies.
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T> Vertex for T where T: Eq + Hash + Clone + Debug {}

/// Integer edge weights and path distances.
///
/// `W::max_value()` is reserved as the "unreachable" sentinel.
pub trait Weight: PrimInt + Hash + Debug {}

impl<W> Weight for W where W: PrimInt + Hash + Debug {}

/// Trait representing a weighted directed graph
pub trait Graph<T, W>: Debug
where
    T: Vertex,
    W: Weight,
{
    /// Returns the number of distinct vertices seen as an edge endpoint
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the outgoing edges from a vertex, empty if it has none
    fn outgoing_edges(&self, vertex: &T) -> &[Edge<T, W>];

    /// Returns every vertex that has appeared as the source or target of an edge
    fn known_vertices(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    /// Returns true if the vertex is an endpoint of at least one edge
    fn has_vertex(&self, vertex: &T) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &T, to: &T) -> bool {
        self.outgoing_edges(from).iter().any(|edge| edge.target == *to)
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<T, W>: Graph<T, W>
where
    T: Vertex,
    W: Weight,
{
    /// Adds a directed edge between vertices with the given weight.
    ///
    /// Edges are appended; parallel edges between the same pair are kept as given.
    fn add_edge(&mut self, source: T, target: T, weight: W) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedGraph;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Junction {
        name: String,
        level: u8,
    }

    fn junction(name: &str, level: u8) -> Junction {
        Junction {
            name: name.to_string(),
            level,
        }
    }

    fn assert_vertex<T: Vertex>() {}

    #[test]
    fn test_derived_struct_is_a_vertex() {
        assert_vertex::<Junction>();
        assert_vertex::<(i32, i32)>();
        assert_vertex::<&str>();
    }

    #[test]
    fn test_search_over_struct_vertices() {
        let mut graph: WeightedGraph<Junction> = WeightedGraph::new();
        graph.add_edge(junction("gate", 0), junction("hall", 1), 2).unwrap();
        graph.add_edge(junction("hall", 1), junction("vault", 2), 3).unwrap();

        let result = graph.shortest_paths_from(junction("gate", 0)).unwrap();
        assert_eq!(result.distance(&junction("vault", 2)), Some(5));
        assert_eq!(
            result.any_path_to(&junction("vault", 2)),
            Some(vec![junction("gate", 0), junction("hall", 1), junction("vault", 2)])
        );
    }
}
