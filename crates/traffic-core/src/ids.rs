//! Strongly typed identifier wrappers.
//!
//! `NodeId`/`EdgeId` follow the `typed_id!` macro idiom: `Copy + Ord + Hash`
//! with an `INVALID` sentinel and an `.index()` helper for direct `Vec`
//! indexing. `ClusterId` is distinct — it wraps an `h3o::CellIndex` rather
//! than a dense array index, since clusters are keyed by stable H3 cell
//! identity, not by allocation order.

use std::fmt;

use h3o::CellIndex;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a road-network node.
    pub struct NodeId(u32);
}

typed_id! {
    /// Index of a directed road-network edge.
    pub struct EdgeId(u32);
}

typed_id! {
    /// Identifier of a single origin-destination travel demand.
    pub struct TravelId(u32);
}

// ── ClusterId ─────────────────────────────────────────────────────────────────

/// A stable H3 cell identifier.
///
/// Wraps `h3o::CellIndex` directly rather than re-deriving a bit layout —
/// any H3 implementation compatible with the standard cell-id encoding at the
/// chosen resolution is interchangeable here (point→cell, cell→centre,
/// k-ring are the only operations relied on).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterId(pub CellIndex);

impl ClusterId {
    #[inline]
    pub fn cell(self) -> CellIndex {
        self.0
    }

    /// Geometric centre of the H3 cell (boundary centroid, not a mean of a
    /// point set — see `ClusterCentreStrategy::HexagonCenter`).
    pub fn centre(self) -> crate::geo::Coordinates {
        h3o::LatLng::from(self.0).into()
    }
}

impl From<CellIndex> for ClusterId {
    fn from(cell: CellIndex) -> Self {
        ClusterId(cell)
    }
}

/// Renders the canonical lowercase-hex H3 string form — the representation
/// every external interface (JSON, CSV) uses for a `ClusterId`.
impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}
