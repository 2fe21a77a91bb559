//! Error types for the arbor core library.
//!
//! Each structure reports precondition violations through its own enum. Every
//! enum carries a companion code type so callers can log or match on a stable
//! machine-readable identifier instead of the display text.

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::std::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

pub(crate) use define_error_codes;

/// An error produced while building or reading a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A graph must hold at least one vertex.
    #[error("a graph must contain at least one vertex")]
    EmptyGraph,
    /// A vertex id fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge weight was NaN or infinite.
    #[error("edge ({left}, {right}) has a non-finite weight")]
    NonFiniteWeight {
        /// First endpoint of the rejected edge.
        left: usize,
        /// Second endpoint of the rejected edge.
        right: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A graph must hold at least one vertex.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// A vertex id fell outside `[0, vertex_count)`.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// An edge weight was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
    }
}

/// An error produced by the [`crate::UnionFind`] implementations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum UnionFindError {
    /// An element id fell outside `[0, len)`.
    #[error("element {element} is out of range for a union-find over {len} elements")]
    OutOfRange {
        /// The offending element id.
        element: usize,
        /// Number of elements tracked by the structure.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`UnionFindError`] variants.
    enum UnionFindErrorCode for UnionFindError {
        /// An element id fell outside `[0, len)`.
        OutOfRange => OutOfRange { .. } => "UNION_FIND_OUT_OF_RANGE",
    }
}

/// An error produced by [`crate::IndexedMinPq`] operations.
///
/// A failed operation never modifies the queue.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum QueueError {
    /// The queue was constructed with no slots.
    #[error("an indexed priority queue needs a capacity of at least 1")]
    ZeroCapacity,
    /// A slot id fell outside `[0, capacity)`.
    #[error("slot {slot} is out of range for capacity {capacity}")]
    SlotOutOfRange {
        /// The offending slot id.
        slot: usize,
        /// Capacity of the queue.
        capacity: usize,
    },
    /// `insert` targeted a slot that already holds a priority.
    #[error("slot {slot} is already present in the queue")]
    SlotOccupied {
        /// The occupied slot id.
        slot: usize,
    },
    /// `change` or `remove` targeted a slot that holds no priority.
    #[error("slot {slot} is not present in the queue")]
    SlotVacant {
        /// The vacant slot id.
        slot: usize,
    },
    /// Every slot is already present.
    #[error("the queue is full (capacity {capacity})")]
    Full {
        /// Capacity of the queue.
        capacity: usize,
    },
    /// `peek_min` or `extract_min` was called on an empty queue.
    #[error("the queue is empty")]
    Empty,
}

define_error_codes! {
    /// Stable codes describing [`QueueError`] variants.
    enum QueueErrorCode for QueueError {
        /// The queue was constructed with no slots.
        ZeroCapacity => ZeroCapacity => "QUEUE_ZERO_CAPACITY",
        /// A slot id fell outside `[0, capacity)`.
        SlotOutOfRange => SlotOutOfRange { .. } => "QUEUE_SLOT_OUT_OF_RANGE",
        /// `insert` targeted a slot that already holds a priority.
        SlotOccupied => SlotOccupied { .. } => "QUEUE_SLOT_OCCUPIED",
        /// `change` or `remove` targeted a slot that holds no priority.
        SlotVacant => SlotVacant { .. } => "QUEUE_SLOT_VACANT",
        /// Every slot is already present.
        Full => Full { .. } => "QUEUE_FULL",
        /// The queue holds no slots.
        Empty => Empty => "QUEUE_EMPTY",
    }
}
