use arbor_core::{Edge, Graph, Weight};

/// Sedgewick's tinyEWG graph: eight vertices, sixteen weighted edges.
pub const TINY_EWG: [(usize, usize, Weight); 16] = [
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

#[must_use]
pub fn tiny_ewg_edges() -> Vec<Edge> {
    TINY_EWG
        .iter()
        .map(|&(source, target, weight)| Edge::new(source, target, weight))
        .collect()
}

#[must_use]
pub fn tiny_ewg() -> Graph {
    Graph::from_edges(8, tiny_ewg_edges()).expect("tinyEWG is well formed")
}

/// Asserts that two weights are bit-for-bit identical.
#[track_caller]
pub fn assert_same_weight(actual: Weight, expected: Weight) {
    assert_eq!(
        actual.to_bits(),
        expected.to_bits(),
        "weight {actual} differs from expected {expected}",
    );
}
