//! Deterministic graph shapes for tests and benchmarks.
//!
//! Vertices are `0..node_count`. Edge lists are sorted so the same shape,
//! size and seed always produce the same graph.

use std::fmt::Debug;

use ahash::AHashSet;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{config::GraphConfig, errors::GraphError, graph::Graph};

#[derive(Clone, Debug)]
pub enum GraphShape {
    Line,
    Star,
    Cycle,
    Complete,
    BinaryTree,
    Grid2D { width: usize, height: usize },
    RandomErdosRenyi { edges: usize },
}

/// Edges of `shape` as `(from, to)` pairs with `from < to`.
///
/// Fails with [`GraphError::InvalidInput`] when the shape cannot be built
/// on `node_count` vertices.
pub fn edge_list(
    shape: &GraphShape,
    node_count: usize,
    seed: u64,
) -> Result<Vec<(usize, usize)>, GraphError> {
    let mut edges = match shape {
        GraphShape::Line => (1..node_count).map(|idx| (idx - 1, idx)).collect(),
        GraphShape::Star => (1..node_count).map(|leaf| (0, leaf)).collect(),
        GraphShape::Cycle => cycle_edges(node_count)?,
        GraphShape::Complete => (0..node_count)
            .flat_map(|u| ((u + 1)..node_count).map(move |v| (u, v)))
            .collect(),
        GraphShape::BinaryTree => (1..node_count).map(|child| ((child - 1) / 2, child)).collect(),
        GraphShape::Grid2D { width, height } => grid_edges(*width, *height, node_count)?,
        GraphShape::RandomErdosRenyi { edges } => random_edges(node_count, *edges, seed)?,
    };
    edges.sort_unstable();
    Ok(edges)
}

/// Materializes `shape` as a graph. Valued graphs get `W::default()` on
/// every edge.
pub fn generate_graph<W>(
    shape: &GraphShape,
    node_count: usize,
    seed: u64,
    config: GraphConfig,
) -> Result<Graph<usize, W>, GraphError>
where
    W: Clone + PartialEq + Debug + Default,
{
    let edges = edge_list(shape, node_count, seed)?;
    let mut graph = Graph::with_vertices(0..node_count, config);
    for (from, to) in edges {
        graph.connect(&from, &to, config.valued.then(W::default))?;
    }
    Ok(graph)
}

fn cycle_edges(count: usize) -> Result<Vec<(usize, usize)>, GraphError> {
    if count < 3 {
        return Err(GraphError::invalid_input(format!(
            "a cycle needs at least 3 vertices, got {count}"
        )));
    }
    let mut edges: Vec<(usize, usize)> = (1..count).map(|idx| (idx - 1, idx)).collect();
    edges.push((0, count - 1));
    Ok(edges)
}

fn grid_edges(
    width: usize,
    height: usize,
    node_count: usize,
) -> Result<Vec<(usize, usize)>, GraphError> {
    if width * height != node_count {
        return Err(GraphError::invalid_input(format!(
            "grid {width}x{height} does not hold {node_count} vertices"
        )));
    }
    let mut edges = Vec::with_capacity(node_count * 2);
    for y in 0..height {
        for x in 0..width {
            let base = y * width + x;
            if x + 1 < width {
                edges.push((base, base + 1));
            }
            if y + 1 < height {
                edges.push((base, base + width));
            }
        }
    }
    Ok(edges)
}

// Draws distinct unordered pairs until `edge_count` are collected.
fn random_edges(
    node_count: usize,
    edge_count: usize,
    seed: u64,
) -> Result<Vec<(usize, usize)>, GraphError> {
    let max_edges = node_count.saturating_mul(node_count.saturating_sub(1)) / 2;
    if edge_count > max_edges {
        return Err(GraphError::invalid_input(format!(
            "{edge_count} edges do not fit on {node_count} vertices"
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut chosen = AHashSet::with_capacity(edge_count);
    while chosen.len() < edge_count {
        let from = rng.gen_range(0..node_count);
        let to = rng.gen_range(0..node_count);
        if from != to {
            chosen.insert((from.min(to), from.max(to)));
        }
    }
    Ok(chosen.into_iter().collect())
}
