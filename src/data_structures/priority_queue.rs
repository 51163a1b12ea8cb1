use std::collections::{BTreeMap, HashSet};

use crate::graph::{Vertex, Weight};
use crate::{Error, Result};

/// A set of vertices bucketed by priority, supporting decrease-key.
///
/// Priorities only ever move downwards during a shortest-path search, so a sorted
/// map from priority to the set of vertices at that priority is enough; no heap
/// with arbitrary re-keying is needed.
///
/// Vertices sharing the lowest priority are popped in the iteration order of their
/// bucket's `HashSet`. That order is arbitrary and may differ between runs; callers
/// must not rely on it.
#[derive(Debug)]
pub struct PriorityQueueSet<T, W>
where
    T: Vertex,
    W: Weight,
{
    /// Non-empty buckets keyed by priority
    by_priority: BTreeMap<W, HashSet<T>>,

    /// Every vertex currently queued, regardless of priority
    members: HashSet<T>,
}

impl<T, W> PriorityQueueSet<T, W>
where
    T: Vertex,
    W: Weight,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        PriorityQueueSet {
            by_priority: BTreeMap::new(),
            members: HashSet::new(),
        }
    }

    /// Creates a new empty queue sized for `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueueSet {
            by_priority: BTreeMap::new(),
            members: HashSet::with_capacity(capacity),
        }
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the number of queued vertices
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the vertex is still queued
    pub fn contains(&self, vertex: &T) -> bool {
        self.members.contains(vertex)
    }

    /// Lowest priority currently queued
    pub fn min_priority(&self) -> Option<W> {
        self.by_priority.keys().next().copied()
    }

    /// Queues a vertex at the given priority.
    ///
    /// Returns false, leaving the queue untouched, if the vertex is already queued.
    pub fn insert(&mut self, priority: W, vertex: T) -> bool {
        if !self.members.insert(vertex.clone()) {
            return false;
        }
        self.by_priority.entry(priority).or_default().insert(vertex);
        true
    }

    /// Removes and returns a vertex with the lowest priority
    pub fn pop_min(&mut self) -> Result<T> {
        let mut lowest = self.by_priority.first_entry().ok_or(Error::EmptyQueue)?;
        let vertex = lowest
            .get()
            .iter()
            .next()
            .cloned()
            .ok_or(Error::EmptyQueue)?;

        lowest.get_mut().remove(&vertex);
        if lowest.get().is_empty() {
            lowest.remove();
        }
        self.members.remove(&vertex);

        Ok(vertex)
    }

    /// Moves a queued vertex from `old_priority` to the strictly lower `new_priority`.
    ///
    /// The caller must pass the priority the vertex is currently queued at.
    pub fn decrease_priority(&mut self, old_priority: W, new_priority: W, vertex: T) {
        debug_assert!(
            new_priority < old_priority,
            "priority of {:?} must decrease: {:?} -> {:?}",
            vertex,
            old_priority,
            new_priority
        );

        let removed = match self.by_priority.get_mut(&old_priority) {
            Some(bucket) => {
                let removed = bucket.remove(&vertex);
                if bucket.is_empty() {
                    self.by_priority.remove(&old_priority);
                }
                removed
            }
            None => false,
        };
        debug_assert!(
            removed,
            "{:?} is not queued at priority {:?}",
            vertex,
            old_priority
        );

        if removed {
            self.by_priority.entry(new_priority).or_default().insert(vertex);
        }
    }
}

impl<T, W> Default for PriorityQueueSet<T, W>
where
    T: Vertex,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}
