use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::algorithm::{DistanceMap, SearchStats, ShortestPathAlgorithm};
use crate::data_structures::PriorityQueueSet;
use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// Dijkstra's algorithm, keeping every predecessor that ties for the shortest distance
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Stop as soon as the closest queued vertex is unreachable
    early_exit: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { early_exit: true }
    }

    /// Disabling early exit drains the whole queue; distances and predecessors are
    /// unchanged, only [`SearchStats`] differ.
    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W, G> ShortestPathAlgorithm<T, W, G> for Dijkstra
where
    T: Vertex,
    W: Weight,
    G: Graph<T, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, start: T) -> Result<DistanceMap<T, W>> {
        CalculationContext::new(graph, self.early_exit).distance_map(start)
    }
}

/// State owned by a single calculation, discarded once the result is built
struct CalculationContext<'g, T, W, G>
where
    T: Vertex,
    W: Weight,
    G: Graph<T, W>,
{
    graph: &'g G,
    early_exit: bool,
    distances: HashMap<T, W>,
    predecessors: HashMap<T, HashSet<T>>,
    queue: PriorityQueueSet<T, W>,
    stats: SearchStats,
}

impl<'g, T, W, G> CalculationContext<'g, T, W, G>
where
    T: Vertex,
    W: Weight,
    G: Graph<T, W>,
{
    fn new(graph: &'g G, early_exit: bool) -> Self {
        let n = graph.vertex_count();
        CalculationContext {
            graph,
            early_exit,
            distances: HashMap::with_capacity(n + 1),
            predecessors: HashMap::new(),
            queue: PriorityQueueSet::with_capacity(n + 1),
            stats: SearchStats::default(),
        }
    }

    fn distance_map(mut self, start: T) -> Result<DistanceMap<T, W>> {
        debug!(
            "computing shortest paths from {:?} over {} vertices and {} edges",
            start,
            self.graph.vertex_count(),
            self.graph.edge_count()
        );

        self.initialise(&start);
        self.populate_distance_map()?;

        debug!(
            "settled {} vertices, examined {} edges (early exit: {})",
            self.stats.settled, self.stats.edges_examined, self.stats.early_exit
        );

        Ok(DistanceMap::new(
            start,
            self.distances,
            self.predecessors,
            self.stats,
        ))
    }

    /// Queues every known vertex: the start at zero, everything else unreachable
    fn initialise(&mut self, start: &T) {
        let graph = self.graph;
        for vertex in graph.known_vertices() {
            let score = if vertex == start {
                W::zero()
            } else {
                W::max_value()
            };
            self.queue.insert(score, vertex.clone());
            self.distances.insert(vertex.clone(), score);
        }

        // A start with no edges still has a distance to itself
        if !self.distances.contains_key(start) {
            self.queue.insert(W::zero(), start.clone());
            self.distances.insert(start.clone(), W::zero());
        }
    }

    fn populate_distance_map(&mut self) -> Result<()> {
        let graph = self.graph;

        while !self.queue.is_empty() {
            let source = self.queue.pop_min()?;
            let dist_u = self.tentative_distance(&source)?;

            if dist_u == W::max_value() {
                if self.early_exit {
                    debug!(
                        "stopping at unreachable {:?} with {} vertices still queued",
                        source,
                        self.queue.len()
                    );
                    self.stats.early_exit = true;
                    return Ok(());
                }
                continue;
            }
            self.stats.settled += 1;

            for edge in graph.outgoing_edges(&source) {
                self.stats.edges_examined += 1;

                // Popped vertices are settled and never relaxed again
                if !self.queue.contains(&edge.target) {
                    continue;
                }

                match dist_u.checked_add(&edge.weight) {
                    Some(candidate) if candidate != W::max_value() => {
                        self.update_scores(&source, &edge.target, candidate)?;
                    }
                    _ => {
                        trace!(
                            "distance to {:?} via {:?} overflows, skipping",
                            edge.target,
                            source
                        );
                    }
                }
            }
        }

        Ok(())
    }

    fn update_scores(&mut self, source: &T, target: &T, candidate: W) -> Result<()> {
        let current = self.tentative_distance(target)?;

        if candidate > current {
            return Ok(());
        }

        if candidate < current {
            trace!(
                "{:?}: {:?} -> {:?} via {:?}",
                target,
                current,
                candidate,
                source
            );
            self.distances.insert(target.clone(), candidate);
            self.queue
                .decrease_priority(current, candidate, target.clone());
            self.predecessors
                .insert(target.clone(), HashSet::from([source.clone()]));
            return Ok(());
        }

        trace!("{:?}: tie at {:?} via {:?}", target, candidate, source);
        self.predecessors
            .entry(target.clone())
            .or_default()
            .insert(source.clone());
        Ok(())
    }

    fn tentative_distance(&self, vertex: &T) -> Result<W> {
        self.distances.get(vertex).copied().ok_or_else(|| {
            Error::AlgorithmError(format!("no tentative distance for {:?}", vertex))
        })
    }
}
