//! `Cluster` and its centre strategy.

use std::fmt;
use std::str::FromStr;

use traffic_core::{ClusterId, Coordinates};

use crate::error::ClusterError;

/// How a [`Cluster`]'s `centre` is derived from its member points.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum ClusterCentreStrategy {
    /// Arithmetic mean of all points assigned to the cell.
    Mean,
    /// The H3 cell's own geometric centre, independent of its points.
    HexagonCenter,
}

impl FromStr for ClusterCentreStrategy {
    type Err = ClusterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MEAN" => Ok(ClusterCentreStrategy::Mean),
            "HEXAGON_CENTER" => Ok(ClusterCentreStrategy::HexagonCenter),
            other => Err(ClusterError::InvalidInput(format!(
                "unknown cluster centre strategy: {other}"
            ))),
        }
    }
}

impl fmt::Display for ClusterCentreStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClusterCentreStrategy::Mean => "MEAN",
            ClusterCentreStrategy::HexagonCenter => "HEXAGON_CENTER",
        };
        write!(f, "{s}")
    }
}

#[cfg(feature = "serde")]
impl TryFrom<String> for ClusterCentreStrategy {
    type Error = ClusterError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(feature = "serde")]
impl From<ClusterCentreStrategy> for String {
    fn from(s: ClusterCentreStrategy) -> Self {
        s.to_string()
    }
}

/// A bucket of population points sharing one H3 cell.
///
/// Invariant: under [`ClusterCentreStrategy::HexagonCenter`], `cell_id ==
/// H3(centre, resolution)`; under `Mean` the centre may drift into a
/// neighboring cell. Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cluster {
    pub cell_id: ClusterId,
    pub centre: Coordinates,
    pub points: Vec<Coordinates>,
}

impl Cluster {
    pub fn new(cell_id: ClusterId, centre: Coordinates, points: Vec<Coordinates>) -> Self {
        Self { cell_id, centre, points }
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}
