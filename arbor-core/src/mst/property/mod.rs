//! Property-based tests for the MST engines.
//!
//! Runs Borůvka, Kruskal and Prim's forest mode on generated graphs and
//! checks them against a sequential Kruskal oracle, then validates the
//! structural invariants of every returned forest: acyclicity, `V - C` edges,
//! spanning every input component and the cut property.

mod equivalence;
mod helpers;
mod oracle;
mod structural;
mod types;
