//! Population configuration: JSON parse + validate only.
//!
//! The epicentre → `Coordinates` sampling routine that actually consumes
//! this configuration lives in the runnable demo binary, not here — this
//! crate's job ends at producing a validated, in-memory `PopulationConfig`.

use std::fmt;
use std::str::FromStr;

use crate::error::{DemandError, DemandResult};

/// The only distribution kind the population configuration contract
/// currently names. A closed tagged string enum: unknown values are
/// rejected rather than silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum DistributionKind {
    Normal,
}

impl FromStr for DistributionKind {
    type Err = DemandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NORMAL" => Ok(DistributionKind::Normal),
            other => {
                Err(DemandError::InvalidInput(format!("unknown distribution_kind: {other}")))
            }
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NORMAL")
    }
}

#[cfg(feature = "serde")]
impl TryFrom<String> for DistributionKind {
    type Error = DemandError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(feature = "serde")]
impl From<DistributionKind> for String {
    fn from(d: DistributionKind) -> Self {
        d.to_string()
    }
}

/// One population epicentre: a labelled point with a population count spread
/// over a radius according to `distribution_kind`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Epicentre {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population_count: u32,
    /// Spread radius in meters.
    pub radius: f64,
    pub distribution_kind: DistributionKind,
}

impl Epicentre {
    fn validate(&self) -> DemandResult<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(DemandError::InvalidInput(format!(
                "epicentre {} has out-of-range latitude {}",
                self.label, self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(DemandError::InvalidInput(format!(
                "epicentre {} has out-of-range longitude {}",
                self.label, self.longitude
            )));
        }
        if !(self.radius > 0.0) || !self.radius.is_finite() {
            return Err(DemandError::InvalidInput(format!(
                "epicentre {} has non-positive or non-finite radius {}",
                self.label, self.radius
            )));
        }
        Ok(())
    }
}

/// The full population-configuration JSON contract.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationConfig {
    pub epicentres: Vec<Epicentre>,
    /// Fraction of each cluster's population that makes a trip.
    pub travel_coefficient: f64,
}

impl PopulationConfig {
    /// Validate field-level constraints (`radius > 0`, latitude/longitude in
    /// range, `travel_coefficient` finite and non-negative). Does not touch
    /// the road graph or any cluster — this is a pure data-shape check.
    pub fn validate(&self) -> DemandResult<()> {
        if self.epicentres.is_empty() {
            return Err(DemandError::InvalidInput("epicentres must not be empty".into()));
        }
        if !(self.travel_coefficient >= 0.0) || !self.travel_coefficient.is_finite() {
            return Err(DemandError::InvalidInput(format!(
                "travel_coefficient must be finite and non-negative, got {}",
                self.travel_coefficient
            )));
        }
        for epicentre in &self.epicentres {
            epicentre.validate()?;
        }
        Ok(())
    }

    #[cfg(feature = "serde")]
    pub fn from_json(s: &str) -> DemandResult<Self> {
        let config: Self = serde_json::from_str(s)
            .map_err(|e| DemandError::InvalidInput(format!("malformed population config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
