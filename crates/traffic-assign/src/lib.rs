//! `traffic-assign` — the incremental batched all-pairs-Dijkstra route
//! assignment engine.
//!
//! | Module       | Contents                                              |
//! |--------------|----------------------------------------------------------|
//! | [`travel`]   | `Travel`, `Route`                                     |
//! | [`dijkstra`] | `DijkstraTree` — single-source shortest paths on a `ClusterGraph` |
//! | [`assigner`] | `TravelRouteAssigner`, `IncrementalBatchedAssigner`, `Assignment`, `AssignDiagnostics`, `batched` |
//! | [`error`]    | `AssignError`, `AssignResult<T>`                      |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                      |
//! |------------|--------------------------------------------------------------|
//! | `parallel` | Runs each batch's per-source Dijkstra trees across a Rayon thread pool, collected deterministically before any volume is mutated. |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.          |

pub mod assigner;
pub mod dijkstra;
pub mod error;
pub mod travel;


pub use assigner::{
    batched, Assignment, AssignDiagnostics, IncrementalBatchedAssigner, TravelRouteAssigner,
};
pub use dijkstra::DijkstraTree;
pub use error::{AssignError, AssignResult};
pub use travel::{Route, Travel};
