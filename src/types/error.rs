//! Error types for the weighted-graph library.

use thiserror::Error;

/// All errors that can occur in the weighted-graph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex index outside `[0, vertex_count)`.
    #[error("Vertex index {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// Edge from a vertex to itself.
    #[error("Self-loop not allowed on vertex {0}")]
    SelfLoop(usize),

    /// Edge already present.
    #[error("Edge {from} -> {to} already exists")]
    DuplicateEdge { from: usize, to: usize },

    /// Removal of an edge that is not present.
    #[error("Edge {from} -> {to} does not exist")]
    MissingEdge { from: usize, to: usize },

    /// Insertion into a full queue or priority queue.
    #[error("Capacity exhausted: container holds at most {capacity} entries")]
    CapacityExhausted { capacity: usize },

    /// Extraction from an empty queue or priority queue.
    #[error("Extraction from an empty container")]
    Underflow,
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
