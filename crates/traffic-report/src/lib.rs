//! `traffic-report` — read-only result summarisation over a finished route
//! assignment.
//!
//! | Module       | Contents                           |
//! |--------------|---------------------------------------|
//! | [`summary`]  | `Summary`, `summarize`             |
//! | [`edge_view`]| `EdgeView`, `edge_view`             |
//!
//! No file I/O lives here — persistence is an explicitly excluded concern at
//! the core level; the one demo binary writes CSV on top of these views.

pub mod edge_view;
pub mod summary;

#[cfg(test)]
mod tests;

pub use edge_view::{edge_view, EdgeView};
pub use summary::{summarize, Summary};
