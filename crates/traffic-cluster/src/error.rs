//! Clustering error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type ClusterResult<T> = Result<T, ClusterError>;
