//! Borůvka's algorithm over a plain edge list.
//!
//! Each phase runs in two steps. `Scan` resets the per-component cheapest
//! edge table, drops edges whose endpoints already share a component and
//! records the cheapest crossing edge of every component. `Merge` unions
//! each component with its cheapest edge unless an earlier merge in the same
//! phase already connected them. Phases repeat until no crossing edge is
//! left, which takes at most `log2(V)` phases because every surviving
//! component merges at least once per phase.

use tracing::{debug, info, instrument, warn};

use crate::{Edge, Graph, UnionFind, WeightedQuickUnionPathCompression};

use super::{MstError, SpanningForest, ensure_undirected, record_accepted, record_phase};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    Scan,
    Merge,
    Done,
}

/// Borůvka MST engine.
///
/// # Examples
/// ```
/// use arbor_core::{Boruvka, Edge};
///
/// let edges = [Edge::new(0, 1, 1.0), Edge::new(1, 2, 2.0), Edge::new(0, 2, 3.0)];
/// let forest = Boruvka::new(edges, 3)?.run()?;
/// assert_eq!(forest.edges().len(), 2);
/// assert_eq!(forest.total_weight(), 3.0);
/// # Ok::<(), arbor_core::MstError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Boruvka {
    edges: Vec<Edge>,
    vertex_count: usize,
}

impl Boruvka {
    /// Validates `edges` against `vertex_count` and prepares a run.
    ///
    /// An empty edge list is accepted and yields an empty forest.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyGraph`] when `vertex_count == 0`,
    /// [`MstError::InvalidNodeId`] when an endpoint is out of range and
    /// [`MstError::NonFiniteWeight`] when a weight is NaN or infinite.
    pub fn new(
        edges: impl IntoIterator<Item = Edge>,
        vertex_count: usize,
    ) -> Result<Self, MstError> {
        if vertex_count == 0 {
            return Err(MstError::EmptyGraph);
        }
        let edges = edges
            .into_iter()
            .map(|edge| validate_edge(edge, vertex_count))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            edges,
            vertex_count,
        })
    }

    /// Prepares a run over every logical edge of `graph`.
    ///
    /// # Errors
    /// Returns [`MstError::DirectedGraph`] when `graph` is directed.
    pub fn from_graph(graph: &Graph) -> Result<Self, MstError> {
        ensure_undirected(graph)?;
        Self::new(graph.edges(), graph.vertex_count())
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of input edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Computes the minimum spanning forest.
    ///
    /// Ties between equally light crossing edges go to the edge that appears
    /// first in the input, so repeated runs return identical forests.
    ///
    /// # Errors
    /// Returns [`MstError::UnionFind`] only if an internal union-find lookup
    /// fails, which the constructor's validation rules out.
    #[instrument(
        name = "mst.boruvka",
        err,
        skip(self),
        fields(vertices = self.vertex_count, edges = self.edges.len()),
    )]
    pub fn run(&self) -> Result<SpanningForest, MstError> {
        let mut sets = WeightedQuickUnionPathCompression::new(self.vertex_count);
        let mut active: Vec<usize> = (0..self.edges.len()).collect();
        let mut cheapest: Vec<Option<usize>> = vec![None; self.vertex_count];
        let mut accepted = Vec::with_capacity(self.vertex_count.saturating_sub(1));
        let mut phases = 0_usize;
        let mut phase = Phase::Scan;

        while phase != Phase::Done {
            phase = match phase {
                Phase::Scan => {
                    self.scan(&mut sets, &mut active, &mut cheapest)?;
                    if active.is_empty() {
                        Phase::Done
                    } else {
                        Phase::Merge
                    }
                }
                Phase::Merge => {
                    for index in cheapest.iter().flatten() {
                        let edge = self.edges[*index];
                        if sets.union(edge.source(), edge.target())? {
                            accepted.push(edge);
                        }
                    }
                    phases += 1;
                    record_phase();
                    debug!(
                        phase = phases,
                        components = sets.count(),
                        survivors = active.len(),
                        "borůvka phase complete"
                    );
                    Phase::Scan
                }
                Phase::Done => Phase::Done,
            };
        }

        record_accepted("boruvka", accepted.len());
        let forest = SpanningForest::new(accepted, self.vertex_count);
        info!(
            phases,
            edges = forest.edges().len(),
            components = forest.component_count(),
            total_weight = forest.total_weight(),
            "borůvka completed"
        );
        Ok(forest)
    }

    /// Drops intra-component edges from `active` and fills `cheapest` with
    /// the lightest crossing edge of every component root.
    fn scan(
        &self,
        sets: &mut WeightedQuickUnionPathCompression,
        active: &mut Vec<usize>,
        cheapest: &mut [Option<usize>],
    ) -> Result<(), MstError> {
        cheapest.fill(None);
        let mut kept = 0;
        for cursor in 0..active.len() {
            let index = active[cursor];
            let edge = self.edges[index];
            let left = sets.find(edge.source())?;
            let right = sets.find(edge.target())?;
            if left == right {
                continue;
            }
            for root in [left, right] {
                if self.is_lighter(index, cheapest[root]) {
                    cheapest[root] = Some(index);
                }
            }
            active[kept] = index;
            kept += 1;
        }
        active.truncate(kept);
        Ok(())
    }

    fn is_lighter(&self, candidate: usize, current: Option<usize>) -> bool {
        current.is_none_or(|current| self.edges[candidate].weight() < self.edges[current].weight())
    }
}

fn validate_edge(edge: Edge, vertex_count: usize) -> Result<Edge, MstError> {
    for node in [edge.source(), edge.target()] {
        if node >= vertex_count {
            warn!(node, vertex_count, "edge references an unknown vertex");
            return Err(MstError::InvalidNodeId {
                node,
                node_count: vertex_count,
            });
        }
    }
    if !edge.weight().is_finite() {
        warn!(
            left = edge.source(),
            right = edge.target(),
            "edge has a non-finite weight"
        );
        return Err(MstError::NonFiniteWeight {
            left: edge.source(),
            right: edge.target(),
        });
    }
    Ok(edge)
}
