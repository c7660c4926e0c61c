use thiserror::Error;

/// Error type for graph mutations and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex not found: {0}")]
    VertexNotFound(String),
    #[error("edge not found: {0}")]
    EdgeNotFound(String),
    #[error("operation requires a directed graph: {0}")]
    NotDigraph(String),
    #[error("edge value mismatch: {0}")]
    NotValued(String),
    #[error("graph has no vertices")]
    EmptyGraph,
    #[error("asymmetric undirected edge: {0}")]
    AsymmetricEdge(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl GraphError {
    pub fn vertex_not_found<T: Into<String>>(msg: T) -> Self {
        GraphError::VertexNotFound(msg.into())
    }

    pub fn edge_not_found<T: Into<String>>(msg: T) -> Self {
        GraphError::EdgeNotFound(msg.into())
    }

    pub fn not_digraph<T: Into<String>>(msg: T) -> Self {
        GraphError::NotDigraph(msg.into())
    }

    pub fn not_valued<T: Into<String>>(msg: T) -> Self {
        GraphError::NotValued(msg.into())
    }

    pub fn asymmetric_edge<T: Into<String>>(msg: T) -> Self {
        GraphError::AsymmetricEdge(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        GraphError::InvalidInput(msg.into())
    }
}
