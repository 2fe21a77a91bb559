//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for the disjoint-set structures, the indexed
//! priority queue and the three spanning tree engines.

pub mod error;
pub mod graph;
pub mod params;
