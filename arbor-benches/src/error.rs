//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark inputs
//! so that setup functions can propagate failures with `?` instead of
//! using `.expect()`.

use arbor_core::{GraphError, MstError, QueueError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph construction rejected a generated edge.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// Spanning tree computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// Priority queue setup failed.
    #[error("priority queue setup failed: {0}")]
    Queue(#[from] QueueError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
