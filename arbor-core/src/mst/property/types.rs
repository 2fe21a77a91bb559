//! Type definitions for MST property-based tests.

use crate::{Edge, Graph, GraphError};

/// Weight distribution strategy for generated graphs.
///
/// Each variant stresses a different part of the engines: tie handling,
/// early termination, or forest output.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a distinct weight drawn from a continuous range.
    Unique,
    /// Large groups of edges share identical weights.
    ManyIdentical,
    /// Random spanning tree plus roughly `0.5n` to `n` extra edges.
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Several components with no cross-component edges.
    Disconnected,
    /// Self-loops and parallel edges mixed into a sparse graph.
    Multigraph,
}

/// Fixture for MST property tests.
///
/// Keeps the generation context alongside the edges so failures report the
/// distribution that produced them.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub node_count: usize,
    /// Generated edges in insertion order.
    pub edges: Vec<Edge>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Builds the undirected graph the fixture describes.
    pub(super) fn graph(&self) -> Result<Graph, GraphError> {
        Graph::from_edges(self.node_count, self.edges.iter().copied())
    }

    /// Short context string appended to property failure messages.
    pub(super) fn context(&self) -> String {
        format!(
            "distribution={:?}, nodes={}, edges={}",
            self.distribution,
            self.node_count,
            self.edges.len(),
        )
    }
}
