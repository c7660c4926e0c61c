//! Core `Graph` struct and construction.

use std::fmt::Debug;
use std::hash::Hash;

use ahash::AHashMap;
use log::debug;

use crate::{config::GraphConfig, errors::GraphError};

/// Neighbors of one vertex, each with its optional weight.
pub type Adjacency<V, W> = AHashMap<V, Option<W>>;

/// Every vertex of a graph mapped to its own adjacency.
pub type VertexMap<V, W> = AHashMap<V, Adjacency<V, W>>;

/// In-memory adjacency graph.
///
/// Vertices are caller-supplied identifiers. Each vertex owns a map of the
/// vertices it points at; for undirected graphs that map is kept symmetric
/// by every mutation, so `v` lists `u` exactly when `u` lists `v` and both
/// entries hold the same weight. `directed` and `valued` come from the
/// [`GraphConfig`] and never change.
///
/// `W` is the edge weight type. Unvalued graphs store `None` for every edge
/// and can leave `W` at its `()` default.
#[derive(Clone, Debug)]
pub struct Graph<V, W = ()> {
    pub(crate) vertices: VertexMap<V, W>,
    pub(crate) config: GraphConfig,
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Clone + PartialEq + Debug,
{
    pub fn new(config: GraphConfig) -> Self {
        Self {
            vertices: AHashMap::new(),
            config,
        }
    }

    /// Builds a graph holding `vertices` and no edges.
    pub fn with_vertices<I>(vertices: I, config: GraphConfig) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut graph = Self::new(config);
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        graph
    }

    /// Builds a graph from an initial vertex-to-neighbors mapping.
    ///
    /// Every outer key becomes a vertex before any edge is created, so
    /// neighbors may be listed in any order. Each listed neighbor goes
    /// through the same checks as [`Graph::connect`]. In an undirected graph
    /// an edge listed on one side only is mirrored, while an edge listed on
    /// both sides with different weights is rejected with
    /// [`GraphError::AsymmetricEdge`].
    pub fn from_adjacency<I, A>(initial: I, config: GraphConfig) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (V, A)>,
        A: IntoIterator<Item = (V, Option<W>)>,
    {
        let entries: Vec<(V, Vec<(V, Option<W>)>)> = initial
            .into_iter()
            .map(|(vertex, adjacency)| (vertex, adjacency.into_iter().collect()))
            .collect();
        let mut graph = Self::with_vertices(entries.iter().map(|(v, _)| v.clone()), config);
        for (from, adjacency) in entries {
            for (to, weight) in adjacency {
                graph.validate_weight(&weight)?;
                if !config.directed {
                    graph.check_mirrored_weight(&from, &to, &weight)?;
                }
                graph.connect(&from, &to, weight)?;
            }
        }
        debug!(
            "built graph with {} vertices and {} edges (directed={}, valued={})",
            graph.order(),
            graph.edge_count(),
            config.directed,
            config.valued
        );
        Ok(graph)
    }

    pub fn config(&self) -> GraphConfig {
        self.config
    }

    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    pub fn is_valued(&self) -> bool {
        self.config.valued
    }

    // An undirected entry already written by its mirror must agree on weight.
    fn check_mirrored_weight(&self, from: &V, to: &V, weight: &Option<W>) -> Result<(), GraphError> {
        let existing = self.vertices.get(from).and_then(|adjacency| adjacency.get(to));
        match existing {
            Some(stored) if stored != weight => Err(GraphError::asymmetric_edge(format!(
                "{from:?} -- {to:?}: {stored:?} vs {weight:?}"
            ))),
            _ => Ok(()),
        }
    }

    pub(crate) fn adjacency(&self, vertex: &V) -> Result<&Adjacency<V, W>, GraphError> {
        self.vertices
            .get(vertex)
            .ok_or_else(|| GraphError::vertex_not_found(format!("{vertex:?}")))
    }

    pub(crate) fn require_digraph(&self, operation: &str) -> Result<(), GraphError> {
        if self.config.directed {
            Ok(())
        } else {
            Err(GraphError::not_digraph(operation))
        }
    }
}

impl<V, W> Default for Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Clone + PartialEq + Debug,
{
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}
