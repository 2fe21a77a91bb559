//! Weighted graph stored as adjacency lists.
//!
//! Vertices are dense ids in `[0, vertex_count)`. Every inserted edge is kept
//! twice over: once as per-vertex adjacency records (two records for an
//! undirected edge) and once in an insertion-ordered edge list, so algorithms
//! that want each logical edge exactly once never have to deduplicate the
//! adjacency view.

use std::cmp::Ordering;

use tracing::warn;

use crate::error::GraphError;

/// Weight type carried by edges and MST totals.
pub type Weight = f64;

/// A weighted edge between two vertex ids.
///
/// Edges order by weight first (using [`f64::total_cmp`]) and then by
/// endpoints so sorting an edge list is deterministic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: Weight,
}

impl Edge {
    /// Creates an edge `source -- target` with the given weight.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint as inserted.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint as inserted.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns the endpoints as `(min, max)`.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }

    /// Returns the endpoint opposite `vertex`, or `None` when `vertex` is not
    /// an endpoint of this edge.
    #[must_use]
    pub const fn other(&self, vertex: usize) -> Option<usize> {
        if vertex == self.source {
            Some(self.target)
        } else if vertex == self.target {
            Some(self.source)
        } else {
            None
        }
    }
}

impl Eq for Edge {}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One entry in a vertex's adjacency list: the neighbour and the weight of
/// the connecting edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Adjacency {
    vertex: usize,
    weight: Weight,
}

impl Adjacency {
    /// Returns the neighbouring vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex(&self) -> usize { self.vertex }

    /// Returns the weight of the connecting edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

/// A weighted graph over a fixed number of vertices.
///
/// # Examples
/// ```
/// use arbor_core::Graph;
///
/// let mut graph = Graph::new(3)?;
/// graph.insert_edge(0, 1, 0.5)?;
/// graph.insert_edge(1, 2, 1.5)?;
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.adjacency(1)?.len(), 2);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    directed: bool,
    adjacency: Vec<Vec<Adjacency>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates an undirected graph with `vertex_count` isolated vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count == 0`.
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        Self::with_direction(vertex_count, false)
    }

    /// Creates a directed graph with `vertex_count` isolated vertices.
    ///
    /// Inserting `(u, v)` only records `v` in `u`'s adjacency list. The MST
    /// algorithms reject directed graphs.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count == 0`.
    pub fn new_directed(vertex_count: usize) -> Result<Self, GraphError> {
        Self::with_direction(vertex_count, true)
    }

    fn with_direction(vertex_count: usize, directed: bool) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        Ok(Self {
            directed,
            adjacency: vec![Vec::new(); vertex_count],
            edges: Vec::new(),
        })
    }

    /// Builds an undirected graph from an edge iterator.
    ///
    /// # Errors
    /// Returns the first error [`Graph::new`] or [`Graph::insert_edge`] would
    /// report.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count)?;
        for edge in edges {
            graph.insert_edge(edge.source, edge.target, edge.weight)?;
        }
        Ok(graph)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of logical edges inserted so far.
    ///
    /// An undirected edge counts once even though it occupies two adjacency
    /// records.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` for graphs built with [`Graph::new_directed`].
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Inserts the edge `source -- target` with `weight`.
    ///
    /// Parallel edges and self-loops are accepted as-is.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is not a
    /// vertex of this graph and [`GraphError::NonFiniteWeight`] when `weight`
    /// is NaN or infinite. The graph is unchanged on error.
    pub fn insert_edge(
        &mut self,
        source: usize,
        target: usize,
        weight: Weight,
    ) -> Result<(), GraphError> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        if !weight.is_finite() {
            warn!(source, target, %weight, "rejecting edge with non-finite weight");
            return Err(GraphError::NonFiniteWeight {
                left: source,
                right: target,
            });
        }

        self.adjacency[source].push(Adjacency {
            vertex: target,
            weight,
        });
        if !self.directed {
            self.adjacency[target].push(Adjacency {
                vertex: source,
                weight,
            });
        }
        self.edges.push(Edge::new(source, target, weight));
        Ok(())
    }

    /// Returns the adjacency records of `vertex` in insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `vertex` is not a vertex
    /// of this graph.
    pub fn adjacency(&self, vertex: usize) -> Result<&[Adjacency], GraphError> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
    }

    /// Iterates every logical edge once, in insertion order and with the
    /// orientation it was inserted with.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    /// Returns the insertion-ordered edge list.
    #[must_use]
    pub fn edge_list(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of adjacency records held by `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `vertex` is not a vertex
    /// of this graph.
    pub fn degree(&self, vertex: usize) -> Result<usize, GraphError> {
        self.adjacency(vertex).map(<[Adjacency]>::len)
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        let vertex_count = self.vertex_count();
        if vertex < vertex_count {
            Ok(())
        } else {
            warn!(vertex, vertex_count, "rejecting out-of-range vertex");
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
            })
        }
    }
}
