//! In-memory adjacency graphs: directed or undirected, with optional edge
//! values, plus structural queries (degree, connectivity, cycles, trees).
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.
//!
//! ```rust
//! use adjgraph::{Graph, GraphConfig};
//!
//! let mut graph: Graph<&str> = Graph::with_vertices(["a", "b", "c"], GraphConfig::undirected());
//! graph.connect(&"a", &"b", None).unwrap();
//! graph.connect(&"b", &"c", None).unwrap();
//! assert!(graph.is_tree());
//! graph.connect(&"c", &"a", None).unwrap();
//! assert!(graph.has_cycle(&"a").unwrap());
//! ```

pub mod algo;
pub mod bench_utils;
pub mod config;
pub mod errors;
pub mod graph;

pub use crate::config::GraphConfig;
pub use crate::errors::GraphError;
pub use crate::graph::{Adjacency, Graph, VertexMap};
