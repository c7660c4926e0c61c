//! Construction options for [`Graph`](crate::Graph).
//!
//! Both flags are fixed when a graph is built and cannot change afterwards.
//! The struct derives serde traits so callers can keep graph options next to
//! the rest of their configuration:
//!
//! ```rust
//! use adjgraph::GraphConfig;
//!
//! let cfg = GraphConfig::directed().with_valued(true);
//! assert!(cfg.directed);
//! assert!(cfg.valued);
//! assert_eq!(GraphConfig::default(), GraphConfig::undirected());
//! ```

use serde::{Deserialize, Serialize};

/// Edge orientation and payload options.
///
/// Missing fields deserialize to `false`, matching [`GraphConfig::default`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Edges are ordered pairs; `u -> v` says nothing about `v -> u`.
    pub directed: bool,
    /// Every edge carries a weight.
    pub valued: bool,
}

impl GraphConfig {
    pub fn new(directed: bool, valued: bool) -> Self {
        Self { directed, valued }
    }

    pub fn undirected() -> Self {
        Self::default()
    }

    pub fn directed() -> Self {
        Self {
            directed: true,
            valued: false,
        }
    }

    /// Undirected graph whose edges carry weights.
    pub fn valued() -> Self {
        Self {
            directed: false,
            valued: true,
        }
    }

    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn with_valued(mut self, valued: bool) -> Self {
        self.valued = valued;
        self
    }
}
