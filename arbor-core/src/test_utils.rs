//! Shared test utilities for `arbor-core`.

use arbor_test_support::property::case_count;
use proptest::test_runner::Config as ProptestConfig;

use crate::{Edge, Graph, Weight};

/// Builds a standard proptest configuration honouring `ARBOR_PBT_CASES`.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases: case_count(default_cases),
        ..ProptestConfig::default()
    }
}

/// Sedgewick's eight-vertex, sixteen-edge weighted graph in file order.
pub(crate) const TINY_EWG: [(usize, usize, Weight); 16] = [
    (4, 5, 0.35),
    (4, 7, 0.37),
    (5, 7, 0.28),
    (0, 7, 0.16),
    (1, 5, 0.32),
    (0, 4, 0.38),
    (2, 3, 0.17),
    (1, 7, 0.19),
    (0, 2, 0.26),
    (1, 2, 0.36),
    (1, 3, 0.29),
    (2, 7, 0.34),
    (6, 2, 0.40),
    (3, 6, 0.52),
    (6, 0, 0.58),
    (6, 4, 0.93),
];

/// Total weight of every minimum spanning tree of [`TINY_EWG`].
pub(crate) const TINY_EWG_MST_WEIGHT: Weight = 1.81;

/// Builds [`TINY_EWG`] as an undirected graph.
pub(crate) fn tiny_ewg() -> Graph {
    Graph::from_edges(8, tiny_ewg_edges()).expect("tinyEWG is well formed")
}

/// Returns [`TINY_EWG`] as edge values.
pub(crate) fn tiny_ewg_edges() -> Vec<Edge> {
    TINY_EWG
        .iter()
        .map(|&(source, target, weight)| Edge::new(source, target, weight))
        .collect()
}

/// Asserts that two weights are bit-for-bit identical.
#[track_caller]
pub(crate) fn assert_weight_eq(actual: Weight, expected: Weight) {
    assert_eq!(
        actual.to_bits(),
        expected.to_bits(),
        "weight {actual} differs from expected {expected}",
    );
}
