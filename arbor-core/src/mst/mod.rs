//! Minimum spanning tree (MST) construction.
//!
//! Three engines produce the same minimum total weight on any undirected,
//! finite-weighted graph:
//!
//! - [`Boruvka`] merges every component with its cheapest crossing edge per
//!   phase, starting from a plain edge list;
//! - [`Kruskal`] accepts edges in non-decreasing weight order unless they
//!   close a cycle;
//! - [`Prim`] grows a single tree from a start vertex with an
//!   [`IndexedMinPq`](crate::IndexedMinPq).
//!
//! Disconnected inputs are not an error. Borůvka and Kruskal return a minimum
//! spanning forest; [`Prim::run`] covers only the start vertex's component and
//! [`Prim::run_forest`] restarts from every unreached vertex.
//!
//! [`MstBuilder`] selects an engine at runtime and returns a uniform
//! [`SpanningForest`].

mod boruvka;
mod kruskal;
mod prim;
mod solver;

pub use self::{
    boruvka::Boruvka,
    kruskal::Kruskal,
    prim::{Prim, PrimTree},
    solver::{MstAlgorithm, MstBuilder, MstSolver, PrimStart},
};

use thiserror::Error;
use tracing::warn;

use crate::{
    Edge, Graph, Weight,
    error::{GraphError, QueueError, UnionFindError, define_error_codes},
};

/// Errors returned while computing a minimum spanning tree or forest.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The caller requested an MST over zero vertices.
    #[error("cannot compute an MST for an empty graph")]
    EmptyGraph,
    /// An edge referenced a vertex that is not present in the graph.
    #[error("edge references node {node}, but node_count is {node_count}")]
    InvalidNodeId {
        /// The invalid vertex id referenced by an edge.
        node: usize,
        /// The number of vertices in the graph.
        node_count: usize,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// The first endpoint id (as provided).
        left: usize,
        /// The second endpoint id (as provided).
        right: usize,
    },
    /// MST construction is only defined for undirected graphs.
    #[error("cannot compute an MST for a directed graph")]
    DirectedGraph,
    /// Prim's start vertex fell outside the graph.
    #[error("start vertex {start} is out of range for a graph with {vertex_count} vertices")]
    StartOutOfRange {
        /// The requested start vertex.
        start: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// A graph lookup failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// A union-find operation failed.
    #[error(transparent)]
    UnionFind(#[from] UnionFindError),
    /// A priority queue operation failed.
    #[error(transparent)]
    Queue(#[from] QueueError),
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The caller requested an MST over zero vertices.
        EmptyGraph => EmptyGraph => "EMPTY_GRAPH",
        /// An edge referenced a vertex that is not present in the graph.
        InvalidNodeId => InvalidNodeId { .. } => "INVALID_NODE_ID",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "NON_FINITE_WEIGHT",
        /// MST construction is only defined for undirected graphs.
        DirectedGraph => DirectedGraph => "DIRECTED_GRAPH",
        /// Prim's start vertex fell outside the graph.
        StartOutOfRange => StartOutOfRange { .. } => "START_OUT_OF_RANGE",
        /// A graph lookup failed.
        Graph => Graph(..) => "GRAPH",
        /// A union-find operation failed.
        UnionFind => UnionFind(..) => "UNION_FIND",
        /// A priority queue operation failed.
        Queue => Queue(..) => "QUEUE",
    }
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected the forest is a minimum spanning tree
/// with `vertex_count - 1` edges. In general a forest over `V` vertices with
/// `E` edges has `V - E` components, counting isolated vertices.
///
/// The total weight is the sum of the edge weights taken in ascending order,
/// so every engine reports a bit-identical total for the same graph.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    total_weight: Weight,
    component_count: usize,
}

impl SpanningForest {
    pub(crate) fn new(edges: Vec<Edge>, vertex_count: usize) -> Self {
        let component_count = vertex_count.saturating_sub(edges.len());
        let total_weight = canonical_total(&edges);
        Self {
            edges,
            total_weight,
            component_count,
        }
    }

    /// Returns the forest edges in the order the engine accepted them.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the forest's edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> Weight { self.total_weight }

    /// Returns the number of connected components spanned by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Consumes the forest and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

/// Sums edge weights in ascending [`f64::total_cmp`] order.
///
/// All minimum spanning forests of a graph share one multiset of edge
/// weights, so this sum does not depend on the order an engine accepted
/// edges in.
pub(crate) fn canonical_total(edges: &[Edge]) -> Weight {
    let mut weights: Vec<Weight> = edges.iter().map(Edge::weight).collect();
    weights.sort_by(Weight::total_cmp);
    weights.into_iter().fold(0.0, |total, weight| total + weight)
}

fn ensure_undirected(graph: &Graph) -> Result<(), MstError> {
    if graph.is_directed() {
        warn!(
            vertices = graph.vertex_count(),
            "directed graph passed to an MST engine"
        );
        return Err(MstError::DirectedGraph);
    }
    Ok(())
}

#[cfg(feature = "metrics")]
fn record_accepted(algorithm: &'static str, edges: usize) {
    metrics::counter!("mst_edges_accepted", "algorithm" => algorithm).increment(edges as u64);
}

#[cfg(not(feature = "metrics"))]
fn record_accepted(_algorithm: &'static str, _edges: usize) {}

#[cfg(feature = "metrics")]
fn record_phase() {
    metrics::counter!("boruvka_phases").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_phase() {}

#[cfg(test)]
mod property;
