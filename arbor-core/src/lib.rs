//! Arbor core library.
//!
//! Disjoint-set structures, an indexed minimum priority queue and three
//! minimum spanning tree engines over an adjacency-list graph.
//!
//! ```
//! use arbor_core::{Graph, MstAlgorithm, MstBuilder};
//!
//! let mut graph = Graph::new(4)?;
//! graph.insert_edge(0, 1, 0.5)?;
//! graph.insert_edge(1, 2, 0.25)?;
//! graph.insert_edge(2, 3, 1.0)?;
//! graph.insert_edge(3, 0, 0.75)?;
//!
//! let forest = MstBuilder::new()
//!     .with_algorithm(MstAlgorithm::Boruvka)
//!     .build()
//!     .solve(&graph)?;
//! assert!(forest.is_tree());
//! assert_eq!(forest.total_weight(), 1.5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod graph;
mod mst;
mod pq;
#[cfg(test)]
mod test_utils;
mod union_find;

pub use crate::{
    error::{
        GraphError, GraphErrorCode, QueueError, QueueErrorCode, UnionFindError,
        UnionFindErrorCode,
    },
    graph::{Adjacency, Edge, Graph, Weight},
    mst::{
        Boruvka, Kruskal, MstAlgorithm, MstBuilder, MstError, MstErrorCode, MstSolver, Prim,
        PrimStart, PrimTree, SpanningForest,
    },
    pq::{IndexedMinPq, Priority},
    union_find::{
        QuickFind, QuickUnion, UnionFind, WeightedQuickUnion, WeightedQuickUnionPathCompression,
    },
};
