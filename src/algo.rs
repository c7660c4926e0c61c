//! Structural analysis built on the adjacency queries.
//!
//! Traversals run on an explicit stack over a per-call index arena, so depth
//! is bounded by memory rather than the call stack, and no visitation state
//! outlives a call. Traversals follow each vertex's own adjacency entries,
//! i.e. edge direction in a digraph.

use std::fmt::Debug;
use std::hash::Hash;

use ahash::{AHashMap, AHashSet};
use log::trace;

use crate::{errors::GraphError, graph::Graph};

/// DFS coloring for cycle detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Color {
    Unvisited,
    OnPath,
    Explored,
}

/// Dense indices for one traversal. Built per call from the adjacency map.
struct IndexArena<'g, V> {
    ids: Vec<&'g V>,
    index: AHashMap<&'g V, usize>,
    successors: Vec<Vec<usize>>,
}

impl<'g, V> IndexArena<'g, V>
where
    V: Eq + Hash + Clone + Debug,
{
    fn build<W>(graph: &'g Graph<V, W>) -> Self
    where
        W: Clone + PartialEq + Debug,
    {
        let ids: Vec<&V> = graph.vertices.keys().collect();
        let index: AHashMap<&V, usize> = ids.iter().enumerate().map(|(i, v)| (*v, i)).collect();
        let successors = ids
            .iter()
            .map(|vertex| {
                graph.vertices[*vertex]
                    .keys()
                    .filter_map(|target| index.get(target).copied())
                    .collect()
            })
            .collect();
        Self {
            ids,
            index,
            successors,
        }
    }

    fn position(&self, vertex: &V) -> Result<usize, GraphError> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::vertex_not_found(format!("{vertex:?}")))
    }

    fn reachable_from(&self, start: usize) -> Vec<bool> {
        let mut seen = vec![false; self.ids.len()];
        self.mark_reachable(start, &mut seen);
        seen
    }

    fn mark_reachable(&self, start: usize, seen: &mut [bool]) {
        let mut stack = vec![start];
        seen[start] = true;
        while let Some(node) = stack.pop() {
            for &next in &self.successors[node] {
                if !seen[next] {
                    seen[next] = true;
                    stack.push(next);
                }
            }
        }
    }

    /// A vertex that reaches every other vertex, if one exists.
    ///
    /// Sweeps unvisited vertices in arena order; only the root of the last
    /// sweep can reach everything, so one more traversal settles it. Whether
    /// a root exists does not depend on arena order.
    fn spanning_root(&self) -> Option<usize> {
        let mut seen = vec![false; self.ids.len()];
        let mut last = None;
        for vertex in 0..self.ids.len() {
            if !seen[vertex] {
                self.mark_reachable(vertex, &mut seen);
                last = Some(vertex);
            }
        }
        let candidate = last?;
        self.reachable_from(candidate)
            .into_iter()
            .all(|reached| reached)
            .then_some(candidate)
    }

    /// Three-colour DFS from `origin`. In an undirected graph the edge back
    /// to the path parent is skipped.
    fn cycle_from(&self, origin: usize, directed: bool) -> Option<(usize, usize)> {
        let mut colors = vec![Color::Unvisited; self.ids.len()];
        let mut parents: Vec<Option<usize>> = vec![None; self.ids.len()];
        let mut stack = vec![Frame {
            vertex: origin,
            cursor: 0,
        }];
        colors[origin] = Color::OnPath;
        while let Some(frame) = stack.last_mut() {
            let node = frame.vertex;
            let Some(&next) = self.successors[node].get(frame.cursor) else {
                colors[node] = Color::Explored;
                stack.pop();
                continue;
            };
            frame.cursor += 1;
            if !directed && parents[node] == Some(next) {
                continue;
            }
            match colors[next] {
                Color::OnPath => return Some((node, next)),
                Color::Unvisited => {
                    colors[next] = Color::OnPath;
                    parents[next] = Some(node);
                    stack.push(Frame {
                        vertex: next,
                        cursor: 0,
                    });
                }
                Color::Explored => {}
            }
        }
        None
    }
}

struct Frame {
    vertex: usize,
    cursor: usize,
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Clone + PartialEq + Debug,
{
    /// True when every vertex has the same [`Graph::get_degree`]. An empty
    /// graph is regular.
    pub fn is_regular(&self) -> bool {
        let degrees = self.degree_table();
        let mut values = degrees.values();
        match values.next() {
            Some(reference) => values.all(|degree| degree == reference),
            None => true,
        }
    }

    /// True when every vertex is adjacent to all `order() - 1` others.
    ///
    /// Self-loops are ignored, so a graph is complete exactly when each pair
    /// of distinct vertices is connected (in both directions for a digraph).
    pub fn is_complete(&self) -> bool {
        let mut incoming: AHashMap<&V, usize> =
            self.vertices.keys().map(|vertex| (vertex, 0)).collect();
        for (from, adjacency) in &self.vertices {
            for target in adjacency.keys().filter(|target| *target != from) {
                if let Some(count) = incoming.get_mut(target) {
                    *count += 1;
                }
            }
        }
        let expected = self.order().saturating_sub(1);
        incoming.values().all(|count| *count == expected)
    }

    /// Vertices reachable from `start`, `start` included.
    pub fn transitive_closure(&self, start: &V) -> Result<AHashSet<V>, GraphError> {
        let arena = IndexArena::build(self);
        let origin = arena.position(start)?;
        let closure: AHashSet<V> = arena
            .reachable_from(origin)
            .into_iter()
            .zip(&arena.ids)
            .filter(|(seen, _)| *seen)
            .map(|(_, vertex)| (*vertex).clone())
            .collect();
        trace!("closure of {start:?} has {} vertices", closure.len());
        Ok(closure)
    }

    /// True when every vertex is reachable from some root.
    ///
    /// For an undirected graph this is ordinary connectivity. For a digraph
    /// it asks whether one vertex reaches all others (the root need not be
    /// a source); it is not a strong-connectivity test. The answer depends
    /// only on the edges, never on which vertex a traversal starts from. An
    /// empty graph counts as connected.
    pub fn is_connected(&self) -> bool {
        if self.vertices.is_empty() {
            return true;
        }
        IndexArena::build(self).spanning_root().is_some()
    }

    /// True when a cycle is reachable from `start`.
    ///
    /// Vertices on the current DFS path are marked as on-path; meeting
    /// one again closes a cycle. In an undirected graph the edge back to the
    /// vertex just came from is not a cycle, so the path parent is skipped.
    /// Vertices whose subtrees are fully explored are never re-entered.
    pub fn has_cycle(&self, start: &V) -> Result<bool, GraphError> {
        let arena = IndexArena::build(self);
        let origin = arena.position(start)?;
        match arena.cycle_from(origin, self.config.directed) {
            Some((node, next)) => {
                trace!(
                    "cycle from {start:?} closes at {:?} -> {:?}",
                    arena.ids[node], arena.ids[next]
                );
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Connected and acyclic. A graph with no vertices is not a tree.
    ///
    /// Cycle detection starts at the root found by [`Graph::is_connected`],
    /// which reaches every vertex, so any cycle in the graph is seen and the
    /// answer does not depend on which vertex is tried first.
    pub fn is_tree(&self) -> bool {
        let arena = IndexArena::build(self);
        match arena.spanning_root() {
            Some(root) => arena.cycle_from(root, self.config.directed).is_none(),
            None => false,
        }
    }
}
