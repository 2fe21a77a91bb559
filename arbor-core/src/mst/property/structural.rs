//! Property 2: structural invariants of every returned forest.
//!
//! - **Edge provenance**: each forest edge is an input edge.
//! - **No self-loops** and **finite weights**.
//! - **Acyclicity**: no forest edge closes a cycle.
//! - **Edge count**: `V - C` edges for `C` input components.
//! - **Spanning**: the endpoints of every input edge are forest-connected.
//! - **Cut property**: removing a forest edge splits its tree in two, and no
//!   input edge crossing that cut is lighter than the removed edge.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::Edge;

use super::helpers::{ENGINES, count_components, find_root, run_engine};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let input_components = count_components(fixture.node_count, &fixture.edges);

    for engine in ENGINES {
        let forest = run_engine(engine, fixture)?;
        let edges = forest.edges();
        let fail = |message: String| {
            TestCaseError::fail(format!("{engine}: {message} ({})", fixture.context()))
        };

        validate_provenance(fixture, edges).map_err(fail)?;
        validate_acyclicity(fixture.node_count, edges).map_err(fail)?;

        let expected = fixture.node_count - input_components;
        if edges.len() != expected {
            return Err(fail(format!(
                "{} edges, expected V - C = {expected}",
                edges.len()
            )));
        }
        if forest.component_count() != input_components {
            return Err(fail(format!(
                "reports {} components, input has {input_components}",
                forest.component_count()
            )));
        }

        validate_spanning(fixture, edges).map_err(fail)?;
        validate_cut_property(fixture, edges).map_err(fail)?;
    }
    Ok(())
}

/// Verifies that every forest edge is a finite, non-loop input edge.
fn validate_provenance(fixture: &MstFixture, edges: &[Edge]) -> Result<(), String> {
    for (index, edge) in edges.iter().enumerate() {
        if edge.is_self_loop() {
            return Err(format!("edge {index}: self-loop on node {}", edge.source()));
        }
        if !edge.weight().is_finite() {
            return Err(format!("edge {index}: non-finite weight {}", edge.weight()));
        }
        let known = fixture.edges.iter().any(|input| {
            input.endpoints() == edge.endpoints() && input.weight().total_cmp(&edge.weight()).is_eq()
        });
        if !known {
            return Err(format!("edge {index}: {edge:?} is not an input edge"));
        }
    }
    Ok(())
}

/// Detects cycles in the forest using a bare union-find.
fn validate_acyclicity(node_count: usize, edges: &[Edge]) -> Result<(), String> {
    let mut parent: Vec<usize> = (0..node_count).collect();
    for (index, edge) in edges.iter().enumerate() {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return Err(format!(
                "edge {index}: ({}, {}) creates a cycle",
                edge.source(),
                edge.target()
            ));
        }
        parent[right] = left;
    }
    Ok(())
}

/// Verifies that the forest connects the endpoints of every input edge.
fn validate_spanning(fixture: &MstFixture, edges: &[Edge]) -> Result<(), String> {
    let mut parent = forest_parents(fixture.node_count, edges, None);
    for input in &fixture.edges {
        if find_root(&mut parent, input.source()) != find_root(&mut parent, input.target()) {
            return Err(format!(
                "input edge ({}, {}) spans two forest components",
                input.source(),
                input.target()
            ));
        }
    }
    Ok(())
}

/// Verifies the cut property for every forest edge.
///
/// Input edges never join two forest components (see
/// [`validate_spanning`]), so after removing one forest edge the only input
/// edges with endpoints in different components cross that edge's cut.
fn validate_cut_property(fixture: &MstFixture, edges: &[Edge]) -> Result<(), String> {
    for (skip, removed) in edges.iter().enumerate() {
        let mut parent = forest_parents(fixture.node_count, edges, Some(skip));
        for input in &fixture.edges {
            let crosses =
                find_root(&mut parent, input.source()) != find_root(&mut parent, input.target());
            if crosses && input.weight() < removed.weight() {
                return Err(format!(
                    "cut of forest edge {removed:?} is crossed by lighter input edge {input:?}"
                ));
            }
        }
    }
    Ok(())
}

/// Builds a parent table joining every forest edge except `skip`.
fn forest_parents(node_count: usize, edges: &[Edge], skip: Option<usize>) -> Vec<usize> {
    let mut parent: Vec<usize> = (0..node_count).collect();
    for (index, edge) in edges.iter().enumerate() {
        if Some(index) == skip {
            continue;
        }
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left != right {
            parent[right] = left;
        }
    }
    parent
}
