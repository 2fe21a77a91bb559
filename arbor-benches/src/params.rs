//! Benchmark parameter types.
//!
//! Groups related benchmark parameters into structs so that benchmark ids
//! render consistently across groups.

use std::fmt;

/// Parameters for a graph-backed benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Average number of edges generated per vertex.
    pub edges_per_vertex: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertex_count, self.edges_per_vertex)
    }
}

/// Parameters for a benchmark over a fixed number of elements.
#[derive(Clone, Debug)]
pub struct SizeBenchParams {
    /// Number of elements (sites or queue slots).
    pub len: usize,
}

impl fmt::Display for SizeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.len)
    }
}
