//! Cluster-graph error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
