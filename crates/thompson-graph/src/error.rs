//! Errors raised by graph construction and traversal.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex id outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange { vertex: usize, vertex_count: usize },

    /// The call was made with arguments that can never be valid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GraphError {
    pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> Result<(), GraphError> {
        if vertex < vertex_count {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                vertex,
                vertex_count,
            })
        }
    }
}
