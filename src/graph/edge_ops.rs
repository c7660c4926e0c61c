//! Edge creation, removal and weight lookup.

use std::fmt::Debug;
use std::hash::Hash;

use log::trace;

use crate::errors::GraphError;

use super::Graph;

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Clone + PartialEq + Debug,
{
    /// Adds the edge `v1 -> v2`, and `v2 -> v1` as well when undirected.
    ///
    /// `weight` must be `Some` on a valued graph and `None` otherwise.
    /// Connecting an existing edge overwrites its weight.
    pub fn connect(&mut self, v1: &V, v2: &V, weight: Option<W>) -> Result<(), GraphError> {
        self.validate_endpoints(v1, v2)?;
        self.validate_weight(&weight)?;
        if !self.config.directed {
            if let Some(adjacency) = self.vertices.get_mut(v2) {
                adjacency.insert(v1.clone(), weight.clone());
            }
        }
        if let Some(adjacency) = self.vertices.get_mut(v1) {
            adjacency.insert(v2.clone(), weight);
        }
        trace!("connected {v1:?} -> {v2:?}");
        Ok(())
    }

    /// Removes the edge `v1 -> v2`, and its mirror when undirected.
    pub fn disconnect(&mut self, v1: &V, v2: &V) -> Result<(), GraphError> {
        self.validate_endpoints(v1, v2)?;
        let removed = self
            .vertices
            .get_mut(v1)
            .and_then(|adjacency| adjacency.remove(v2));
        if removed.is_none() {
            return Err(GraphError::edge_not_found(format!("{v1:?} -> {v2:?}")));
        }
        if !self.config.directed {
            if let Some(adjacency) = self.vertices.get_mut(v2) {
                adjacency.remove(v1);
            }
        }
        trace!("disconnected {v1:?} -> {v2:?}");
        Ok(())
    }

    /// Returns whether `v1` lists `v2` as a neighbor.
    pub fn has_edge(&self, v1: &V, v2: &V) -> Result<bool, GraphError> {
        self.validate_endpoints(v1, v2)?;
        Ok(self.adjacency(v1)?.contains_key(v2))
    }

    /// Weight stored on the edge `v1 -> v2`.
    pub fn get_value(&self, v1: &V, v2: &V) -> Result<&W, GraphError> {
        if !self.config.valued {
            return Err(GraphError::not_valued("graph does not store edge values"));
        }
        self.validate_endpoints(v1, v2)?;
        match self.adjacency(v1)?.get(v2) {
            Some(Some(weight)) => Ok(weight),
            Some(None) => Err(GraphError::not_valued(format!(
                "edge {v1:?} -> {v2:?} has no value"
            ))),
            None => Err(GraphError::edge_not_found(format!("{v1:?} -> {v2:?}"))),
        }
    }

    /// Number of edges. An undirected edge, self-loops included, counts once.
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.vertices.values().map(|adjacency| adjacency.len()).sum();
        if self.config.directed {
            return entries;
        }
        let loops = self
            .vertices
            .iter()
            .filter(|(vertex, adjacency)| adjacency.contains_key(*vertex))
            .count();
        (entries + loops) / 2
    }

    pub(crate) fn validate_endpoints(&self, v1: &V, v2: &V) -> Result<(), GraphError> {
        for vertex in [v1, v2] {
            if !self.vertices.contains_key(vertex) {
                return Err(GraphError::vertex_not_found(format!("{vertex:?}")));
            }
        }
        Ok(())
    }

    pub(crate) fn validate_weight(&self, weight: &Option<W>) -> Result<(), GraphError> {
        match (self.config.valued, weight) {
            (true, None) => Err(GraphError::not_valued(
                "valued graph requires an edge value",
            )),
            (false, Some(value)) => Err(GraphError::not_valued(format!(
                "unvalued graph cannot store {value:?}"
            ))),
            _ => Ok(()),
        }
    }
}
