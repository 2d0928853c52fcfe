use thiserror::Error;

/// Errors raised while validating or building a spanning forest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An edge names a vertex outside `0..vertex_count`.
    #[error("edge {edge} references vertex {vertex}, but the graph has {vertex_count} vertices")]
    OutOfRangeVertex {
        edge: usize,
        vertex: usize,
        vertex_count: usize,
    },

    /// An edge weight that cannot be ordered, such as a floating-point NaN.
    #[error("edge {edge} has a weight that cannot be ordered")]
    UnorderedWeight { edge: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
