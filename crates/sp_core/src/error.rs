use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid vertex id {id} (graph has {num_nodes} vertices)")]
    InvalidId { id: usize, num_nodes: usize },

    #[error("Number of vertices must be greater than 0")]
    EmptyGraph,

    #[error("Missing vertex (id: {0})")]
    MissingVertex(usize),
}

pub type Result<T> = std::result::Result<T, GraphError>;
