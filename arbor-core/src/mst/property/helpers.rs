//! Shared helper functions for MST property-based tests.

use proptest::test_runner::TestCaseError;

use crate::{Boruvka, Edge, Kruskal, Prim, SpanningForest, Weight};

use super::types::MstFixture;

/// Engines exercised by every property, in reporting order.
pub(super) const ENGINES: [&str; 3] = ["boruvka", "kruskal", "prim"];

/// Path-halving find over a bare parent table.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Counts the components of `edges` over `node_count` vertices, ignoring
/// self-loops.
pub(super) fn count_components(node_count: usize, edges: &[Edge]) -> usize {
    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut components = node_count;
    for edge in edges {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }
    components
}

/// Sums edge weights from lightest to heaviest.
pub(super) fn ascending_total(edges: &[Edge]) -> Weight {
    let mut weights: Vec<Weight> = edges.iter().map(Edge::weight).collect();
    weights.sort_by(|left, right| left.total_cmp(right));
    let mut total = 0.0;
    for weight in weights {
        total += weight;
    }
    total
}

/// Returns `true` when two totals are bit-for-bit identical.
pub(super) fn same_bits(left: Weight, right: Weight) -> bool {
    left.to_bits() == right.to_bits()
}

/// Runs the named engine over the fixture.
pub(super) fn run_engine(engine: &str, fixture: &MstFixture) -> Result<SpanningForest, TestCaseError> {
    let graph = fixture
        .graph()
        .map_err(|err| TestCaseError::fail(format!("graph construction failed: {err}")))?;
    let result = match engine {
        "boruvka" => Boruvka::new(fixture.edges.iter().copied(), fixture.node_count)
            .and_then(|boruvka| boruvka.run()),
        "kruskal" => Kruskal::new(&graph).run(),
        "prim" => Prim::new(&graph).run_forest(),
        other => return Err(TestCaseError::fail(format!("unknown engine {other}"))),
    };
    result.map_err(|err| {
        TestCaseError::fail(format!("{engine} failed: {err} ({})", fixture.context()))
    })
}
