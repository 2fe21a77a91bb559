//! Kruskal's algorithm over a graph's edge-list view.

use tracing::{info, instrument};

use crate::{Edge, Graph, UnionFind, WeightedQuickUnionPathCompression};

use super::{MstError, SpanningForest, ensure_undirected, record_accepted};

/// Kruskal MST engine.
///
/// Every logical edge is considered exactly once, in its inserted
/// orientation, even though an undirected graph stores two adjacency
/// records per edge.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, Kruskal};
///
/// let mut graph = Graph::new(4)?;
/// graph.insert_edge(0, 1, 1.0)?;
/// graph.insert_edge(2, 3, 2.0)?;
/// let forest = Kruskal::new(&graph).run()?;
/// assert_eq!(forest.edges().len(), 2);
/// assert_eq!(forest.component_count(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Kruskal<'graph> {
    graph: &'graph Graph,
}

impl<'graph> Kruskal<'graph> {
    /// Prepares a run over `graph`.
    #[must_use]
    pub fn new(graph: &'graph Graph) -> Self {
        Self { graph }
    }

    /// Computes the minimum spanning forest.
    ///
    /// Edges are accepted in non-decreasing weight order; equal weights keep
    /// insertion order. The forest edges are returned in acceptance order and
    /// the scan stops as soon as `vertex_count - 1` edges are accepted.
    ///
    /// # Errors
    /// Returns [`MstError::DirectedGraph`] when the graph is directed.
    #[instrument(
        name = "mst.kruskal",
        err,
        skip(self),
        fields(vertices = self.graph.vertex_count(), edges = self.graph.edge_count()),
    )]
    pub fn run(&self) -> Result<SpanningForest, MstError> {
        ensure_undirected(self.graph)?;
        let vertex_count = self.graph.vertex_count();

        let mut candidates: Vec<Edge> = self.graph.edges().collect();
        candidates.sort_by(|left, right| left.weight().total_cmp(&right.weight()));

        let limit = vertex_count.saturating_sub(1);
        let mut sets = WeightedQuickUnionPathCompression::new(vertex_count);
        let mut accepted = Vec::with_capacity(limit);

        for edge in candidates {
            if accepted.len() == limit {
                break;
            }
            if sets.union(edge.source(), edge.target())? {
                accepted.push(edge);
            }
        }

        record_accepted("kruskal", accepted.len());
        let forest = SpanningForest::new(accepted, vertex_count);
        info!(
            edges = forest.edges().len(),
            components = forest.component_count(),
            total_weight = forest.total_weight(),
            "kruskal completed"
        );
        Ok(forest)
    }
}
