//! Demand generation error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemandError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type DemandResult<T> = Result<T, DemandError>;
