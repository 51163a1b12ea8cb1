use crate::algorithm::{Dijkstra, DistanceMap, ShortestPathAlgorithm};
use crate::graph::traits::{Graph, MutableGraph, Vertex, Weight};
use crate::{Error, Result};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// A directed, weighted edge
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<T, W = u64> {
    pub source: T,
    pub target: T,
    pub weight: W,
}

/// An append-only directed graph indexed by source vertex
#[derive(Debug, Clone)]
pub struct WeightedGraph<T, W = u64>
where
    T: Vertex,
    W: Weight,
{
    /// Outgoing edges for each source vertex, in insertion order
    outgoing_edges: HashMap<T, Vec<Edge<T, W>>>,

    /// Every vertex seen as either end of an edge
    vertices: HashSet<T>,

    edge_count: usize,
}

impl<T, W> WeightedGraph<T, W>
where
    T: Vertex,
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        WeightedGraph {
            outgoing_edges: HashMap::new(),
            vertices: HashSet::new(),
            edge_count: 0,
        }
    }

    /// Creates a new graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        WeightedGraph {
            outgoing_edges: HashMap::with_capacity(vertices),
            vertices: HashSet::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Vertices with at least one outgoing edge
    pub fn sources(&self) -> impl Iterator<Item = &T> + '_ {
        self.outgoing_edges.keys()
    }

    /// Computes distances and all tying predecessors from `start` with [`Dijkstra`]
    pub fn shortest_paths_from(&self, start: T) -> Result<DistanceMap<T, W>> {
        Dijkstra::new().compute_shortest_paths(self, start)
    }

    /// Runs one independent calculation per start vertex in parallel.
    ///
    /// The graph is only read while the calculations run. Results are in the
    /// same order as `starts`.
    pub fn par_shortest_paths_from(&self, starts: &[T]) -> Result<Vec<DistanceMap<T, W>>>
    where
        T: Send + Sync,
        W: Send + Sync,
    {
        let dijkstra = Dijkstra::new();
        starts
            .par_iter()
            .map(|start| dijkstra.compute_shortest_paths(self, start.clone()))
            .collect()
    }
}

impl<T, W> Default for WeightedGraph<T, W>
where
    T: Vertex,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W> Graph<T, W> for WeightedGraph<T, W>
where
    T: Vertex,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: &T) -> &[Edge<T, W>] {
        self.outgoing_edges
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn known_vertices(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.vertices.iter())
    }

    fn has_vertex(&self, vertex: &T) -> bool {
        self.vertices.contains(vertex)
    }
}

impl<T, W> MutableGraph<T, W> for WeightedGraph<T, W>
where
    T: Vertex,
    W: Weight,
{
    fn add_edge(&mut self, source: T, target: T, weight: W) -> Result<()> {
        if weight < W::zero() {
            log::warn!(
                "rejecting edge {:?} -> {:?} with negative weight {:?}",
                source,
                target,
                weight
            );
            return Err(Error::InvalidWeight(format!("{:?}", weight)));
        }

        self.vertices.insert(source.clone());
        self.vertices.insert(target.clone());
        self.outgoing_edges
            .entry(source.clone())
            .or_default()
            .push(Edge {
                source,
                target,
                weight,
            });
        self.edge_count += 1;

        Ok(())
    }
}
