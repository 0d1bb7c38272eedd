//! `traffic-core` — foundational types for the commuter traffic assignment
//! workspace.
//!
//! Every other `traffic-*` crate depends on this one. It intentionally has
//! no `traffic-*` dependencies and minimal external ones (`h3o`, `rand`,
//! `thiserror`, plus optional `serde`).
//!
//! | Module    | Contents                                            |
//! |-----------|------------------------------------------------------|
//! | [`geo`]   | `Coordinates`                                        |
//! | [`units`] | `Distance`, `Time`, `Speed`, degree conversions      |
//! | [`ids`]   | `ClusterId`, `NodeId`, `EdgeId`, `TravelId`          |
//! | [`rng`]   | `ScopedRng`                                          |
//! | [`travel`]| `Travel`                                             |
//! | [`error`] | `CoreError`, `CoreResult`                            |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod travel;
pub mod units;

#[cfg(test)]
mod tests;

pub use error::{CoreError, CoreResult};
pub use geo::Coordinates;
pub use ids::{ClusterId, EdgeId, NodeId, TravelId};
pub use rng::ScopedRng;
pub use travel::Travel;
pub use units::{degrees_to_meters, meters_to_degrees, Distance, Speed, Time};
