//! Sequential Kruskal oracle for MST property verification.
//!
//! A deliberately plain reference: a full sort, a rank-based union-find
//! independent of the crate's own, and no early exit.

use crate::{Edge, Weight};

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct SequentialMstResult {
    /// Total weight of the minimum spanning forest.
    pub total_weight: Weight,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components after construction.
    pub component_count: usize,
}

/// Computes a minimum spanning forest with textbook Kruskal.
///
/// Self-loops, out-of-range endpoints and non-finite weights are skipped so
/// the oracle can also describe malformed inputs.
pub(super) fn sequential_kruskal(node_count: usize, edges: &[Edge]) -> SequentialMstResult {
    let mut candidates: Vec<Edge> = edges
        .iter()
        .copied()
        .filter(|edge| !is_invalid_edge(edge, node_count))
        .collect();
    candidates.sort_unstable_by(|left, right| left.weight().total_cmp(&right.weight()));

    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut rank: Vec<usize> = vec![0; node_count];
    let mut components = node_count;
    let mut total_weight: Weight = 0.0;
    let mut edge_count = 0;

    for edge in &candidates {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left != right {
            union_by_rank(&mut parent, &mut rank, left, right);
            total_weight += edge.weight();
            edge_count += 1;
            components -= 1;
        }
    }

    SequentialMstResult {
        total_weight,
        edge_count,
        component_count: components,
    }
}

/// Returns `true` when an edge can never be part of a spanning forest.
fn is_invalid_edge(edge: &Edge, node_count: usize) -> bool {
    let is_out_of_bounds = edge.source() >= node_count || edge.target() >= node_count;
    edge.is_self_loop() || is_out_of_bounds || !edge.weight().is_finite()
}

/// Union by rank, breaking ties towards the smaller index.
fn union_by_rank(parent: &mut [usize], rank: &mut [usize], left: usize, right: usize) {
    let (root, child) = match rank[left].cmp(&rank[right]) {
        std::cmp::Ordering::Greater => (left, right),
        std::cmp::Ordering::Less => (right, left),
        std::cmp::Ordering::Equal => (left.min(right), left.max(right)),
    };
    parent[child] = root;
    if rank[root] == rank[child] {
        rank[root] += 1;
    }
}
