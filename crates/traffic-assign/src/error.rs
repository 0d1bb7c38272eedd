//! Assignment error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssignError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Atlas(#[from] traffic_atlas::AtlasError),

    #[error(transparent)]
    Graph(#[from] traffic_graph::GraphError),
}

pub type AssignResult<T> = Result<T, AssignError>;
