//! Seeded synthetic graphs for benchmarking.
//!
//! [`SyntheticGraph`] builds a connected, undirected, weighted graph: a
//! random spanning path guarantees connectivity and the remaining edges
//! join uniformly chosen vertex pairs. Weights are drawn from `[0, 1)`.

use arbor_core::{Edge, Graph};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Average number of edges per vertex; must be at least one.
    pub edges_per_vertex: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A generated graph together with its raw edge list.
///
/// # Examples
///
/// ```
/// use arbor_benches::graph::{SyntheticGraph, SyntheticGraphConfig};
///
/// let config = SyntheticGraphConfig { vertex_count: 16, edges_per_vertex: 3, seed: 7 };
/// let synthetic = SyntheticGraph::generate(&config).expect("valid config");
/// assert_eq!(synthetic.graph().vertex_count(), 16);
/// assert_eq!(synthetic.edges().len(), 48);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    graph: Graph,
    edges: Vec<Edge>,
}

impl SyntheticGraph {
    /// Generates a connected graph from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` or
    /// `edges_per_vertex` is zero.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, BenchSetupError> {
        if config.vertex_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "vertex_count",
            });
        }
        if config.edges_per_vertex == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "edges_per_vertex",
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let total = config.vertex_count.saturating_mul(config.edges_per_vertex);
        let mut edges = Vec::with_capacity(total);
        for vertex in 1..config.vertex_count {
            let anchor = rng.gen_range(0..vertex);
            edges.push(Edge::new(anchor, vertex, rng.gen_range(0.0..1.0)));
        }
        while edges.len() < total {
            let source = rng.gen_range(0..config.vertex_count);
            let target = rng.gen_range(0..config.vertex_count);
            edges.push(Edge::new(source, target, rng.gen_range(0.0..1.0)));
        }

        let graph = Graph::from_edges(config.vertex_count, edges.iter().copied())?;
        Ok(Self { graph, edges })
    }

    /// Returns the generated graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the generated edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Produces `count` seeded `(p, q)` site pairs over `0..len`.
///
/// # Errors
///
/// Returns [`BenchSetupError::ZeroValue`] when `len` is zero.
pub fn union_pairs(
    len: usize,
    count: usize,
    seed: u64,
) -> Result<Vec<(usize, usize)>, BenchSetupError> {
    if len == 0 {
        return Err(BenchSetupError::ZeroValue { context: "len" });
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok((0..count)
        .map(|_| (rng.gen_range(0..len), rng.gen_range(0..len)))
        .collect())
}
