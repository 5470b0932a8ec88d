//! Error types for tour computations and graph editing.

use thiserror::Error;

use crate::{edge::NumEdges, node::Node, node::NumNodes};

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EulerError>;

/// Reason why a graph does not admit an Eulerian tour.
///
/// Only the first offending vertex (in increasing order) is reported.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// A vertex with an odd number of incident edges.
    #[error("vertex {vertex} has odd degree {degree}")]
    OddDegree { vertex: Node, degree: NumNodes },

    /// A vertex without incident edges.
    #[error("vertex {vertex} is isolated")]
    Isolated { vertex: Node },

    /// A vertex that cannot be reached from vertex `0`.
    #[error("vertex {vertex} is not reachable from vertex 0")]
    Unreachable { vertex: Node },
}

/// Unified error type for all fallible operations of this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EulerError {
    /// The graph does not satisfy the Eulerian precondition.
    /// The graph is left untouched.
    #[error("graph must be connected and every vertex must have even degree: {0}")]
    PreconditionViolation(Violation),

    /// A vertex index `>= n` was passed to a matrix-indexed operation.
    #[error("vertex {index} is out of range for a graph with {n} nodes")]
    IndexOutOfRange { index: Node, n: NumNodes },

    /// Self-loops can not be stored in the adjacency matrix.
    #[error("self-loop at vertex {vertex} is not supported")]
    SelfLoop { vertex: Node },

    /// A detour starts at a vertex that is not the origin of any step of the tour.
    /// Indicates a broken internal invariant.
    #[error("cannot splice detour: vertex {vertex} is not visited by the tour")]
    SpliceNotFound { vertex: Node },

    /// The graph passed the degree check but its edges do not form a single component.
    #[error("tour covers only {covered} of {total} edges: graph is not connected")]
    Disconnected { covered: NumEdges, total: NumEdges },

    /// The dense input matrix is not a symmetric 0/1 matrix with zero diagonal.
    #[error("invalid adjacency matrix: {0}")]
    InvalidMatrix(String),
}
