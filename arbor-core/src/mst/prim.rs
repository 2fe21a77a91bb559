//! Prim's algorithm with an indexed priority queue (eager variant).
//!
//! The queue holds at most one entry per vertex: the lightest known edge
//! from the tree to that vertex. Relaxing a vertex lowers its entry with
//! `change` instead of pushing a duplicate.

use tracing::{info, instrument, warn};

use crate::{Edge, Graph, IndexedMinPq, Weight};

use super::{MstError, SpanningForest, canonical_total, ensure_undirected, record_accepted};

/// Prim MST engine.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, Prim};
///
/// let mut graph = Graph::new(3)?;
/// graph.insert_edge(0, 1, 1.0)?;
/// graph.insert_edge(1, 2, 2.0)?;
/// graph.insert_edge(0, 2, 3.0)?;
/// let tree = Prim::new(&graph).run(0)?;
/// assert_eq!(tree.parent(2), Some(1));
/// assert_eq!(tree.total_weight(), 3.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Prim<'graph> {
    graph: &'graph Graph,
}

impl<'graph> Prim<'graph> {
    /// Prepares a run over `graph`.
    #[must_use]
    pub fn new(graph: &'graph Graph) -> Self {
        Self { graph }
    }

    /// Grows a minimum spanning tree of `start`'s component.
    ///
    /// Vertices outside that component keep an absent parent and an infinite
    /// distance.
    ///
    /// # Errors
    /// Returns [`MstError::DirectedGraph`] for directed graphs and
    /// [`MstError::StartOutOfRange`] when `start` is not a vertex.
    #[instrument(
        name = "mst.prim",
        err,
        skip(self),
        fields(vertices = self.graph.vertex_count(), edges = self.graph.edge_count()),
    )]
    pub fn run(&self, start: usize) -> Result<PrimTree, MstError> {
        ensure_undirected(self.graph)?;
        let vertex_count = self.graph.vertex_count();
        if start >= vertex_count {
            warn!(start, vertex_count, "prim start vertex is out of range");
            return Err(MstError::StartOutOfRange {
                start,
                vertex_count,
            });
        }

        let mut search = Search::new(vertex_count)?;
        search.grow(self.graph, start)?;
        let tree = search.finish(vec![start]);
        record_accepted("prim", tree.edges.len());
        info!(
            root = start,
            edges = tree.edges.len(),
            total_weight = tree.total_weight,
            "prim completed"
        );
        Ok(tree)
    }

    /// Grows one tree from every vertex that no earlier tree reached, in
    /// ascending vertex order, and returns the resulting minimum spanning
    /// forest.
    ///
    /// # Errors
    /// Returns [`MstError::DirectedGraph`] for directed graphs.
    #[instrument(
        name = "mst.prim_forest",
        err,
        skip(self),
        fields(vertices = self.graph.vertex_count(), edges = self.graph.edge_count()),
    )]
    pub fn run_forest(&self) -> Result<SpanningForest, MstError> {
        ensure_undirected(self.graph)?;
        let vertex_count = self.graph.vertex_count();

        let mut search = Search::new(vertex_count)?;
        let mut roots = Vec::new();
        for vertex in 0..vertex_count {
            if !search.in_tree[vertex] {
                roots.push(vertex);
                search.grow(self.graph, vertex)?;
            }
        }

        let forest = search.finish(roots).into_forest();
        record_accepted("prim", forest.edges().len());
        info!(
            edges = forest.edges().len(),
            components = forest.component_count(),
            total_weight = forest.total_weight(),
            "prim forest completed"
        );
        Ok(forest)
    }
}

/// The result of [`Prim::run`]: a tree over the start vertex's component.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimTree {
    roots: Vec<usize>,
    parent: Vec<Option<usize>>,
    distance: Vec<Weight>,
    edges: Vec<Edge>,
    total_weight: Weight,
}

impl PrimTree {
    /// Returns the vertices each tree was grown from.
    #[must_use]
    #[rustfmt::skip]
    pub fn roots(&self) -> &[usize] { &self.roots }

    /// Returns the tree parent of every vertex; roots and unreached vertices
    /// have none.
    #[must_use]
    #[rustfmt::skip]
    pub fn parents(&self) -> &[Option<usize>] { &self.parent }

    /// Returns the tree parent of `vertex`, or `None` for a root, an
    /// unreached vertex or an out-of-range id.
    #[must_use]
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parent.get(vertex).copied().flatten()
    }

    /// Returns the weight of the edge joining every vertex to its parent:
    /// `0` for roots and infinity for unreached vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn distances(&self) -> &[Weight] { &self.distance }

    /// Returns `true` when `vertex` joined the tree.
    #[must_use]
    pub fn is_reached(&self, vertex: usize) -> bool {
        self.distance
            .get(vertex)
            .is_some_and(|distance| distance.is_finite())
    }

    /// Returns the tree edges as `(parent, child, weight)` in the order the
    /// children joined the tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the tree's edge weights, taken in ascending order.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> Weight { self.total_weight }

    /// Converts the tree into a [`SpanningForest`]; every unreached vertex
    /// counts as its own component.
    #[must_use]
    pub fn into_forest(self) -> SpanningForest {
        let vertex_count = self.parent.len();
        SpanningForest::new(self.edges, vertex_count)
    }
}

/// Mutable state shared by one or more tree growths over the same graph.
struct Search {
    distance: Vec<Weight>,
    closest: Vec<Option<usize>>,
    in_tree: Vec<bool>,
    queue: IndexedMinPq<Weight>,
    edges: Vec<Edge>,
}

impl Search {
    fn new(vertex_count: usize) -> Result<Self, MstError> {
        Ok(Self {
            distance: vec![Weight::INFINITY; vertex_count],
            closest: vec![None; vertex_count],
            in_tree: vec![false; vertex_count],
            queue: IndexedMinPq::new(vertex_count)?,
            edges: Vec::with_capacity(vertex_count.saturating_sub(1)),
        })
    }

    fn grow(&mut self, graph: &Graph, start: usize) -> Result<(), MstError> {
        self.distance[start] = 0.0;
        self.queue.insert(start, 0.0)?;

        while !self.queue.is_empty() {
            let vertex = self.queue.extract_min()?;
            self.in_tree[vertex] = true;
            if let Some(parent) = self.closest[vertex] {
                self.edges
                    .push(Edge::new(parent, vertex, self.distance[vertex]));
            }
            self.relax(graph, vertex)?;
        }
        Ok(())
    }

    fn relax(&mut self, graph: &Graph, vertex: usize) -> Result<(), MstError> {
        for neighbour in graph.adjacency(vertex)? {
            let other = neighbour.vertex();
            if self.in_tree[other] || neighbour.weight() >= self.distance[other] {
                continue;
            }
            self.distance[other] = neighbour.weight();
            self.closest[other] = Some(vertex);
            if self.queue.contains(other)? {
                self.queue.change(other, neighbour.weight())?;
            } else {
                self.queue.insert(other, neighbour.weight())?;
            }
        }
        Ok(())
    }

    fn finish(self, roots: Vec<usize>) -> PrimTree {
        let total_weight = canonical_total(&self.edges);
        PrimTree {
            roots,
            parent: self.closest,
            distance: self.distance,
            edges: self.edges,
            total_weight,
        }
    }
}
