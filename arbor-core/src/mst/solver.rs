//! Runtime selection of an MST engine.
//!
//! [`MstBuilder`] collects the engine choice and Prim's start policy and
//! produces an [`MstSolver`] that can be reused across graphs.

use crate::Graph;

use super::{Boruvka, Kruskal, MstError, Prim, SpanningForest};

/// The engine an [`MstSolver`] runs.
///
/// # Examples
/// ```
/// use arbor_core::MstAlgorithm;
///
/// assert_eq!(MstAlgorithm::default(), MstAlgorithm::Kruskal);
/// assert_eq!(MstAlgorithm::Prim.as_str(), "prim");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum MstAlgorithm {
    /// Phased cheapest-edge merging; see [`Boruvka`].
    Boruvka,
    /// Sorted edges with cycle rejection; see [`Kruskal`].
    #[default]
    Kruskal,
    /// Vertex-greedy growth with an indexed queue; see [`Prim`].
    Prim,
}

impl MstAlgorithm {
    /// Returns the lower-case engine name used in logs and metrics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boruvka => "boruvka",
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        }
    }
}

/// Where Prim's algorithm starts growing.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum PrimStart {
    /// Grow a single tree from this vertex; other components are left out.
    Vertex(usize),
    /// Grow a tree from every unreached vertex in ascending order.
    #[default]
    EveryComponent,
}

/// Configures and constructs [`MstSolver`] instances.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, MstAlgorithm, MstBuilder, PrimStart};
///
/// let solver = MstBuilder::new()
///     .with_algorithm(MstAlgorithm::Prim)
///     .with_prim_start(PrimStart::Vertex(0))
///     .build();
///
/// let mut graph = Graph::new(2)?;
/// graph.insert_edge(0, 1, 0.5)?;
/// let forest = solver.solve(&graph)?;
/// assert!(forest.is_tree());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MstBuilder {
    algorithm: MstAlgorithm,
    prim_start: PrimStart,
}

impl MstBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the engine to run.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: MstAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Returns the configured engine.
    #[must_use]
    #[rustfmt::skip]
    pub fn algorithm(&self) -> MstAlgorithm { self.algorithm }

    /// Sets Prim's start policy. Ignored by the other engines.
    #[must_use]
    pub fn with_prim_start(mut self, start: PrimStart) -> Self {
        self.prim_start = start;
        self
    }

    /// Returns the configured Prim start policy.
    #[must_use]
    #[rustfmt::skip]
    pub fn prim_start(&self) -> PrimStart { self.prim_start }

    /// Constructs the solver.
    ///
    /// Nothing here depends on a graph, so the start vertex is validated by
    /// [`MstSolver::solve`].
    #[must_use]
    pub fn build(self) -> MstSolver {
        MstSolver {
            algorithm: self.algorithm,
            prim_start: self.prim_start,
        }
    }
}

/// A configured MST engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MstSolver {
    algorithm: MstAlgorithm,
    prim_start: PrimStart,
}

impl MstSolver {
    /// Returns the engine this solver runs.
    #[must_use]
    #[rustfmt::skip]
    pub fn algorithm(&self) -> MstAlgorithm { self.algorithm }

    /// Returns Prim's start policy.
    #[must_use]
    #[rustfmt::skip]
    pub fn prim_start(&self) -> PrimStart { self.prim_start }

    /// Computes a minimum spanning forest of `graph` with the configured
    /// engine.
    ///
    /// # Errors
    /// Returns [`MstError::DirectedGraph`] for directed graphs and
    /// [`MstError::StartOutOfRange`] when [`PrimStart::Vertex`] names a
    /// vertex outside `graph`.
    pub fn solve(&self, graph: &Graph) -> Result<SpanningForest, MstError> {
        match (self.algorithm, self.prim_start) {
            (MstAlgorithm::Boruvka, _) => Boruvka::from_graph(graph)?.run(),
            (MstAlgorithm::Kruskal, _) => Kruskal::new(graph).run(),
            (MstAlgorithm::Prim, PrimStart::Vertex(start)) => {
                Prim::new(graph).run(start).map(super::PrimTree::into_forest)
            }
            (MstAlgorithm::Prim, PrimStart::EveryComponent) => Prim::new(graph).run_forest(),
        }
    }
}
