//! Graph configuration options.

use super::Weight;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// Weight recorded by [`Graph::add_edge`](super::Graph::add_edge).
    pub default_weight: Weight,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self { default_weight: 1 }
    }
}
