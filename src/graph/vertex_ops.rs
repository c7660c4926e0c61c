//! Vertex insertion and removal.

use std::fmt::Debug;
use std::hash::Hash;

use ahash::AHashMap;
use log::debug;

use crate::errors::GraphError;

use super::Graph;

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Clone + PartialEq + Debug,
{
    /// Inserts `vertex` with no neighbors. Re-adding a vertex is a no-op and
    /// leaves its edges untouched.
    pub fn add_vertex(&mut self, vertex: V) {
        self.vertices.entry(vertex).or_insert_with(AHashMap::new);
    }

    /// Deletes `vertex` and scrubs it from every other adjacency.
    ///
    /// The scrub visits every vertex rather than only the neighbors of
    /// `vertex`: in a digraph, predecessors of `vertex` are not recorded on
    /// `vertex` itself.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<(), GraphError> {
        if self.vertices.remove(vertex).is_none() {
            return Err(GraphError::vertex_not_found(format!("{vertex:?}")));
        }
        let mut scrubbed = 0usize;
        for adjacency in self.vertices.values_mut() {
            if adjacency.remove(vertex).is_some() {
                scrubbed += 1;
            }
        }
        debug!("removed vertex {vertex:?}, scrubbed {scrubbed} incoming entries");
        Ok(())
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains_key(vertex)
    }
}
