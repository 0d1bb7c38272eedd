//! Geographic coordinate type.
//!
//! `Coordinates` uses `f64` latitude/longitude. Unlike a per-agent position
//! in a million-agent simulation, cluster centres and road nodes here number
//! in the thousands, so there is no memory pressure pushing towards `f32` —
//! and `h3o`'s cell-indexing API requires `f64` anyway.

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Used only for diagnostics and tests; routing distances come from the
    /// road graph's edge lengths, never from this.
    pub fn distance_m(self, other: Coordinates) -> f64 {
        const R: f64 = 6_371_000.0;

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// Arithmetic mean of a non-empty slice of coordinates.
    ///
    /// Returns `None` for an empty slice.
    pub fn mean(points: &[Coordinates]) -> Option<Coordinates> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let (sum_lat, sum_lon) = points
            .iter()
            .fold((0.0, 0.0), |(lat, lon), p| (lat + p.lat, lon + p.lon));
        Some(Coordinates::new(sum_lat / n, sum_lon / n))
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

impl TryFrom<Coordinates> for h3o::LatLng {
    type Error = h3o::error::InvalidLatLng;

    fn try_from(c: Coordinates) -> Result<Self, Self::Error> {
        h3o::LatLng::new(c.lat, c.lon)
    }
}

impl From<h3o::LatLng> for Coordinates {
    fn from(ll: h3o::LatLng) -> Self {
        Coordinates::new(ll.lat(), ll.lng())
    }
}
