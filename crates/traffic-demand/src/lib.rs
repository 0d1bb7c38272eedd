//! `traffic-demand` — travel demand generation and population configuration.
//!
//! | Module        | Contents                                             |
//! |---------------|---------------------------------------------------------|
//! | [`travel_gen`]| `TravelIdCounter`, `generate_travels` (`Travel` itself lives in `traffic-core`) |
//! | [`population`]| `PopulationConfig`, `Epicentre`, `DistributionKind`  |
//! | [`error`]     | `DemandError`, `DemandResult<T>`                     |
//!
//! Epicentre-to-`Coordinates` sampling is not implemented here — this crate
//! stops at a validated, in-memory `PopulationConfig`; the sampling routine
//! itself lives in the runnable demo binary.

pub mod error;
pub mod population;
pub mod travel_gen;


pub use error::{DemandError, DemandResult};
pub use population::{DistributionKind, Epicentre, PopulationConfig};
pub use traffic_core::Travel;
pub use travel_gen::{generate_travels, TravelIdCounter};
