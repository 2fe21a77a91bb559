//! Property 1: agreement with the sequential oracle.
//!
//! Every engine must match the oracle's total weight bit for bit, along with
//! its edge count and component count. Edge sets may differ when weights tie,
//! but the multiset of accepted weights cannot, so the totals never drift.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::helpers::{ENGINES, ascending_total, run_engine, same_bits};
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let oracle = sequential_kruskal(fixture.node_count, &fixture.edges);
    let mut first_total: Option<(&str, f64)> = None;

    for engine in ENGINES {
        let forest = run_engine(engine, fixture)?;

        if !same_bits(forest.total_weight(), oracle.total_weight) {
            return Err(TestCaseError::fail(format!(
                "{engine}: total weight {} differs from oracle {} ({})",
                forest.total_weight(),
                oracle.total_weight,
                fixture.context(),
            )));
        }
        if !same_bits(forest.total_weight(), ascending_total(forest.edges())) {
            return Err(TestCaseError::fail(format!(
                "{engine}: reported total {} is not the ascending sum of its edges ({})",
                forest.total_weight(),
                fixture.context(),
            )));
        }
        match first_total {
            Some((other, total)) if !same_bits(forest.total_weight(), total) => {
                return Err(TestCaseError::fail(format!(
                    "{engine}: total {} differs from {other} total {total} ({})",
                    forest.total_weight(),
                    fixture.context(),
                )));
            }
            Some(_) => {}
            None => first_total = Some((engine, forest.total_weight())),
        }
        if forest.edges().len() != oracle.edge_count {
            return Err(TestCaseError::fail(format!(
                "{engine}: {} edges, oracle has {} ({})",
                forest.edges().len(),
                oracle.edge_count,
                fixture.context(),
            )));
        }
        if forest.component_count() != oracle.component_count {
            return Err(TestCaseError::fail(format!(
                "{engine}: {} components, oracle has {} ({})",
                forest.component_count(),
                oracle.component_count,
                fixture.context(),
            )));
        }
    }
    Ok(())
}
