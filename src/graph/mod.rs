mod adjacency;
mod core;
mod edge_ops;
mod vertex_ops;

pub use self::core::{Adjacency, Graph, VertexMap};
