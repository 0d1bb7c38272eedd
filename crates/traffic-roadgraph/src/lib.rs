//! `traffic-roadgraph` — road network, spatial indexing, and shortest-path
//! routing.
//!
//! | Module      | Contents                                          |
//! |-------------|----------------------------------------------------|
//! | [`network`] | `RoadGraph` (CSR + R-tree), `RoadGraphBuilder`, `Path` |
//! | [`error`]   | `RoadGraphError`, `RoadGraphResult<T>`            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                           |
//! |---------|---------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod error;
pub mod network;


pub use error::{RoadGraphError, RoadGraphResult};
pub use network::{Path, RoadGraph, RoadGraphBuilder};
