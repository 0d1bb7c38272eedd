//! Road-graph error type.

use thiserror::Error;

use traffic_core::NodeId;

/// Errors produced by `traffic-roadgraph`.
#[derive(Debug, Error)]
pub enum RoadGraphError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("node {0} not found in network")]
    NodeNotFound(NodeId),
}

pub type RoadGraphResult<T> = Result<T, RoadGraphError>;
