//! Atlas error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type AtlasResult<T> = Result<T, AtlasError>;
