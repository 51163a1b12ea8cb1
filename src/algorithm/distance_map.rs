use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::data_structures::PathList;
use crate::graph::{Vertex, Weight};

/// Counters collected while computing a [`DistanceMap`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Vertices popped with a finite distance and expanded
    pub settled: usize,
    /// Outgoing edges looked at from settled vertices
    pub edges_examined: usize,
    /// True if the search stopped on the first unreachable vertex
    pub early_exit: bool,
}

/// Distances and shortest-path predecessors from a single start vertex.
///
/// A snapshot: later changes to the graph are not reflected here.
#[derive(Debug, Clone)]
pub struct DistanceMap<T, W>
where
    T: Vertex,
    W: Weight,
{
    start: T,
    distances: HashMap<T, W>,
    predecessors: HashMap<T, HashSet<T>>,
    stats: SearchStats,
}

impl<T, W> DistanceMap<T, W>
where
    T: Vertex,
    W: Weight,
{
    pub(crate) fn new(
        start: T,
        distances: HashMap<T, W>,
        predecessors: HashMap<T, HashSet<T>>,
        stats: SearchStats,
    ) -> Self {
        DistanceMap {
            start,
            distances,
            predecessors,
            stats,
        }
    }

    /// The sentinel stored for vertices the start cannot reach
    pub fn unreachable() -> W {
        W::max_value()
    }

    pub fn start(&self) -> &T {
        &self.start
    }

    /// Raw distances, including the sentinel for unreachable vertices
    pub fn distances(&self) -> &HashMap<T, W> {
        &self.distances
    }

    /// Raw predecessor sets; the start vertex has no entry
    pub fn predecessor_map(&self) -> &HashMap<T, HashSet<T>> {
        &self.predecessors
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Shortest distance to `vertex`, or `None` if it is unknown or unreachable
    pub fn distance(&self, vertex: &T) -> Option<W> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|&d| d != Self::unreachable())
    }

    pub fn is_reachable(&self, vertex: &T) -> bool {
        self.distance(vertex).is_some()
    }

    /// Vertices immediately before `vertex` on at least one shortest path
    pub fn predecessors(&self, vertex: &T) -> Option<&HashSet<T>> {
        self.predecessors.get(vertex)
    }

    /// Lazily enumerates every distinct shortest path from the start to `target`.
    ///
    /// Each path runs from the start to `target` inclusive. Nothing is yielded for
    /// an unreachable target.
    pub fn paths_to(&self, target: &T) -> Paths<'_, T> {
        let worklist = if self.is_reachable(target) {
            vec![PathList::of(target.clone())]
        } else {
            Vec::new()
        };

        Paths {
            predecessors: &self.predecessors,
            worklist,
        }
    }

    /// One shortest path from the start to `target`, if it is reachable.
    ///
    /// Which of several equally short paths is returned is unspecified; use
    /// [`DistanceMap::paths_to`] to see all of them.
    pub fn any_path_to(&self, target: &T) -> Option<Vec<T>> {
        self.paths_to(target).next()
    }

    /// Every vertex lying on some shortest path to any of `targets`.
    ///
    /// Walks the predecessor graph directly, so it stays cheap even when the number
    /// of distinct paths is very large.
    pub fn vertices_on_shortest_paths<'a, I>(&self, targets: I) -> HashSet<T>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut seen = HashSet::new();
        let mut stack: Vec<&T> = Vec::new();
        for target in targets {
            if self.is_reachable(target) {
                stack.push(target);
            }
        }

        while let Some(vertex) = stack.pop() {
            if !seen.insert(vertex.clone()) {
                continue;
            }
            if let Some(predecessors) = self.predecessors.get(vertex) {
                for predecessor in predecessors {
                    stack.push(predecessor);
                }
            }
        }

        seen
    }
}

/// Iterator over all shortest paths to one target; see [`DistanceMap::paths_to`]
pub struct Paths<'a, T> {
    predecessors: &'a HashMap<T, HashSet<T>>,
    /// Partial paths, each headed by the vertex closest to the start found so far
    worklist: Vec<Rc<PathList<T>>>,
}

impl<'a, T> Iterator for Paths<'a, T>
where
    T: Vertex,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(partial) = self.worklist.pop() {
            match self.predecessors.get(partial.head()) {
                None => return Some(partial.to_vec()),
                Some(predecessors) => {
                    for predecessor in predecessors {
                        self.worklist
                            .push(PathList::prepend(&partial, predecessor.clone()));
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> DistanceMap<char, u64> {
        let distances = HashMap::from([('a', 0), ('b', 1), ('c', 1), ('d', 2), ('x', u64::MAX)]);
        let predecessors = HashMap::from([
            ('b', HashSet::from(['a'])),
            ('c', HashSet::from(['a'])),
            ('d', HashSet::from(['b', 'c'])),
        ]);
        DistanceMap::new('a', distances, predecessors, SearchStats::default())
    }

    #[test]
    fn test_distance_hides_sentinel() {
        let map = diamond();
        assert_eq!(map.distance(&'d'), Some(2));
        assert_eq!(map.distance(&'x'), None);
        assert_eq!(map.distance(&'z'), None);
        assert!(map.is_reachable(&'a'));
    }

    #[test]
    fn test_paths_to_branches_on_ties() {
        let map = diamond();
        let mut paths: Vec<Vec<char>> = map.paths_to(&'d').collect();
        paths.sort();
        assert_eq!(paths, vec![vec!['a', 'b', 'd'], vec!['a', 'c', 'd']]);
    }

    #[test]
    fn test_paths_to_start_is_single_vertex() {
        let map = diamond();
        let paths: Vec<Vec<char>> = map.paths_to(&'a').collect();
        assert_eq!(paths, vec![vec!['a']]);
    }

    #[test]
    fn test_paths_to_unreachable_is_empty() {
        let map = diamond();
        assert_eq!(map.paths_to(&'x').count(), 0);
        assert_eq!(map.paths_to(&'z').count(), 0);
    }

    #[test]
    fn test_any_path_to() {
        let map = diamond();
        let path = map.any_path_to(&'d').unwrap();
        assert!(path == vec!['a', 'b', 'd'] || path == vec!['a', 'c', 'd']);
        assert_eq!(map.any_path_to(&'a'), Some(vec!['a']));
        assert!(map.any_path_to(&'x').is_none());
        assert!(map.any_path_to(&'z').is_none());
    }

    #[test]
    fn test_vertices_on_shortest_paths() {
        let map = diamond();
        let on_paths = map.vertices_on_shortest_paths([&'d', &'x']);
        assert_eq!(on_paths, HashSet::from(['a', 'b', 'c', 'd']));

        let on_paths = map.vertices_on_shortest_paths([&'b']);
        assert_eq!(on_paths, HashSet::from(['a', 'b']));
    }
}
