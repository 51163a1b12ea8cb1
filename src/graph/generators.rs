use crate::graph::{MutableGraph, WeightedGraph};
use crate::Result;
use rand::prelude::*;
use std::collections::HashSet;

/// A grid cell as `(x, y)`
pub type Cell = (usize, usize);

/// Generates a random directed graph on vertices `0..n` with roughly `edges` edges.
/// Weights are drawn from `0..=max_weight`; self-loops are skipped.
pub fn generate_random<R: Rng>(
    rng: &mut R,
    n: usize,
    edges: usize,
    max_weight: u64,
) -> Result<WeightedGraph<usize>> {
    assert!(n > 0, "n must be positive");

    let mut graph = WeightedGraph::with_capacity(n);
    for _ in 0..edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(0..=max_weight))?;
        }
    }

    Ok(graph)
}

/// Generates a 4-connected grid graph of unit-weight moves between open cells.
///
/// Cells in `blocked` get no edges in or out.
pub fn generate_grid(
    width: usize,
    height: usize,
    blocked: &HashSet<Cell>,
) -> Result<WeightedGraph<Cell>> {
    let mut graph = WeightedGraph::with_capacity(width * height);
    let open = |cell: &Cell| !blocked.contains(cell);

    for y in 0..height {
        for x in 0..width {
            let current = (x, y);
            if !open(&current) {
                continue;
            }

            let mut neighbours = Vec::with_capacity(4);
            if x > 0 {
                neighbours.push((x - 1, y));
            }
            if x + 1 < width {
                neighbours.push((x + 1, y));
            }
            if y > 0 {
                neighbours.push((x, y - 1));
            }
            if y + 1 < height {
                neighbours.push((x, y + 1));
            }

            for neighbour in neighbours.into_iter().filter(open) {
                graph.add_edge(current, neighbour, 1)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a layered graph: a source `(0, 0)`, `layers` layers of `width` vertices
/// each fully connected to the next with unit weights, and a sink `(layers + 1, 0)`.
///
/// Every source-to-sink path is a shortest path, so there are `width^layers` of them.
pub fn generate_layered(layers: usize, width: usize) -> Result<WeightedGraph<Cell>> {
    assert!(width > 0, "width must be positive");

    let mut graph = WeightedGraph::new();
    let mut previous = vec![(0, 0)];

    for layer in 1..=layers {
        let current: Vec<Cell> = (0..width).map(|i| (layer, i)).collect();
        for &from in &previous {
            for &to in &current {
                graph.add_edge(from, to, 1)?;
            }
        }
        previous = current;
    }

    let sink = (layers + 1, 0);
    for &from in &previous {
        graph.add_edge(from, sink, 1)?;
    }

    Ok(graph)
}
