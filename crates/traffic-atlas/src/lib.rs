//! `traffic-atlas` — shortest road-graph paths between neighboring cluster
//! centroids.
//!
//! | Module    | Contents                                        |
//! |-----------|----------------------------------------------------|
//! | [`atlas`] | `PathAtlas`, `build_atlas`, `AtlasDiagnostics`  |
//! | [`error`] | `AtlasError`, `AtlasResult<T>`                  |

pub mod atlas;
pub mod error;


pub use atlas::{build_atlas, AtlasDiagnostics, PathAtlas};
pub use error::{AtlasError, AtlasResult};
