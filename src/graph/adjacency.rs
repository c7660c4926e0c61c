//! Read-only structural queries.

use std::fmt::Debug;
use std::hash::Hash;

use ahash::{AHashMap, AHashSet};
use rand::Rng;
use rand::seq::IteratorRandom;

use crate::errors::GraphError;

use super::Graph;

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Clone + PartialEq + Debug,
{
    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    pub fn get_vertices(&self) -> AHashSet<V> {
        self.vertices.keys().cloned().collect()
    }

    /// Picks a vertex uniformly at random from `rng`.
    pub fn get_random_vertex<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&V, GraphError> {
        self.vertices.keys().choose(rng).ok_or(GraphError::EmptyGraph)
    }

    /// Vertices adjacent to `vertex`.
    ///
    /// For a digraph these are the vertices with an edge *into* `vertex`
    /// (its predecessors), which is what [`Graph::get_indegree`] and
    /// [`Graph::get_degree`] count. Use [`Graph::get_successors`] for the
    /// outgoing side.
    pub fn get_adjacents(&self, vertex: &V) -> Result<AHashSet<V>, GraphError> {
        let own = self.adjacency(vertex)?;
        if !self.config.directed {
            return Ok(own.keys().cloned().collect());
        }
        Ok(self
            .vertices
            .iter()
            .filter(|(_, adjacency)| adjacency.contains_key(vertex))
            .map(|(from, _)| from.clone())
            .collect())
    }

    /// Targets of the edges leaving `vertex`.
    pub fn get_successors(&self, vertex: &V) -> Result<AHashSet<V>, GraphError> {
        self.require_digraph("get_successors")?;
        Ok(self.adjacency(vertex)?.keys().cloned().collect())
    }

    /// Sources of the edges entering `vertex`.
    pub fn get_predecessors(&self, vertex: &V) -> Result<AHashSet<V>, GraphError> {
        self.require_digraph("get_predecessors")?;
        self.get_adjacents(vertex)
    }

    pub fn get_outdegree(&self, vertex: &V) -> Result<usize, GraphError> {
        self.require_digraph("get_outdegree")?;
        Ok(self.adjacency(vertex)?.len())
    }

    pub fn get_indegree(&self, vertex: &V) -> Result<usize, GraphError> {
        self.require_digraph("get_indegree")?;
        Ok(self.get_adjacents(vertex)?.len())
    }

    /// Size of [`Graph::get_adjacents`]. On a digraph this equals the
    /// indegree.
    pub fn get_degree(&self, vertex: &V) -> Result<usize, GraphError> {
        if !self.config.directed {
            return Ok(self.adjacency(vertex)?.len());
        }
        Ok(self.get_adjacents(vertex)?.len())
    }

    /// [`Graph::get_degree`] for every vertex in one pass over the edges.
    pub(crate) fn degree_table(&self) -> AHashMap<&V, usize> {
        if !self.config.directed {
            return self
                .vertices
                .iter()
                .map(|(vertex, adjacency)| (vertex, adjacency.len()))
                .collect();
        }
        let mut degrees: AHashMap<&V, usize> =
            self.vertices.keys().map(|vertex| (vertex, 0)).collect();
        for adjacency in self.vertices.values() {
            for target in adjacency.keys() {
                if let Some(count) = degrees.get_mut(target) {
                    *count += 1;
                }
            }
        }
        degrees
    }
}
