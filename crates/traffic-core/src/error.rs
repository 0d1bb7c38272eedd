//! Shared error base.
//!
//! Sub-crates define their own error enums and convert into `CoreError` (or
//! wrap it as one variant) as convenient — both patterns appear in this
//! workspace; prefer whichever keeps call sites clean.

use thiserror::Error;

/// The one error kind that lives at the `traffic-core` level: a malformed
/// input that no amount of retrying or dropping-and-continuing can recover
/// from. Every other crate's `InvalidInput` variant means the same thing,
/// scoped to that crate's own domain.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
