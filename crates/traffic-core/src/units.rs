//! Opaque scalar unit wrappers: `Distance`, `Time`, `Speed`.
//!
//! Each wrapper holds a single canonical scalar — `Distance` in metres,
//! `Time` in seconds, `Speed` in metres/second — and exposes named
//! constructors for every unit a caller might have on hand. No raw `f64`
//! crosses a module boundary anywhere else in this workspace; everything
//! that denotes a length, duration, or rate is one of these three types.
//!
//! # Degree conversion
//!
//! `meters_to_degrees` / `degrees_to_meters` use the fixed ratio
//! `0.82 / (1504 * 60)` degrees/metre — a flat approximation valid for a
//! single metropolitan area, not a general geodesic conversion. Do not use
//! these for distances spanning more than a few tens of kilometres.

/// Degrees per metre, a flat approximation for one metropolitan area.
const DEGREES_PER_METER: f64 = 0.82 / (1504.0 * 60.0);

#[inline]
pub fn meters_to_degrees(meters: f64) -> f64 {
    meters * DEGREES_PER_METER
}

#[inline]
pub fn degrees_to_meters(degrees: f64) -> f64 {
    degrees / DEGREES_PER_METER
}

// ── Distance ────────────────────────────────────────────────────────────────

/// A length, stored canonically in metres.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distance {
    meters: f64,
}

impl Distance {
    pub const ZERO: Distance = Distance { meters: 0.0 };

    #[inline]
    pub fn from_meters(meters: f64) -> Self {
        Self { meters }
    }

    #[inline]
    pub fn from_kilometers(km: f64) -> Self {
        Self::from_meters(km * 1000.0)
    }

    #[inline]
    pub fn from_centimeters(cm: f64) -> Self {
        Self::from_meters(cm / 100.0)
    }

    /// Construct from a count of geographic degrees (flat-approximation).
    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_meters(degrees_to_meters(degrees))
    }

    #[inline]
    pub fn meters(self) -> f64 {
        self.meters
    }

    #[inline]
    pub fn kilometers(self) -> f64 {
        self.meters / 1000.0
    }

    #[inline]
    pub fn centimeters(self) -> f64 {
        self.meters * 100.0
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        meters_to_degrees(self.meters)
    }

    pub fn sum(distances: impl IntoIterator<Item = Distance>) -> Distance {
        Distance::from_meters(distances.into_iter().map(Distance::meters).sum())
    }
}

impl std::ops::Add for Distance {
    type Output = Distance;
    fn add(self, rhs: Distance) -> Distance {
        Distance::from_meters(self.meters + rhs.meters)
    }
}

impl std::ops::Div<Time> for Distance {
    type Output = Speed;
    fn div(self, rhs: Time) -> Speed {
        Speed::from_meters_per_sec(self.meters / rhs.seconds())
    }
}

impl std::ops::Div<Speed> for Distance {
    type Output = Time;
    fn div(self, rhs: Speed) -> Time {
        Time::from_seconds(self.meters / rhs.meters_per_sec())
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} m", self.meters)
    }
}

// ── Time ────────────────────────────────────────────────────────────────────

/// A duration, stored canonically in seconds.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Time {
    seconds: f64,
}

impl Time {
    pub const ZERO: Time = Time { seconds: 0.0 };

    #[inline]
    pub fn from_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    #[inline]
    pub fn from_minutes(minutes: f64) -> Self {
        Self::from_seconds(minutes * 60.0)
    }

    #[inline]
    pub fn from_hours(hours: f64) -> Self {
        Self::from_seconds(hours * 3600.0)
    }

    #[inline]
    pub fn seconds(self) -> f64 {
        self.seconds
    }

    #[inline]
    pub fn minutes(self) -> f64 {
        self.seconds / 60.0
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.seconds / 3600.0
    }

    pub fn sum(times: impl IntoIterator<Item = Time>) -> Time {
        Time::from_seconds(times.into_iter().map(Time::seconds).sum())
    }
}

impl std::ops::Add for Time {
    type Output = Time;
    fn add(self, rhs: Time) -> Time {
        Time::from_seconds(self.seconds + rhs.seconds)
    }
}

impl std::ops::Mul<f64> for Time {
    type Output = Time;
    fn mul(self, rhs: f64) -> Time {
        Time::from_seconds(self.seconds * rhs)
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} min", self.minutes())
    }
}

// ── Speed ───────────────────────────────────────────────────────────────────

/// A rate, stored canonically in metres/second.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Speed {
    meters_per_sec: f64,
}

impl Speed {
    #[inline]
    pub fn from_meters_per_sec(v: f64) -> Self {
        Self { meters_per_sec: v }
    }

    #[inline]
    pub fn from_kph(kph: f64) -> Self {
        Self::from_meters_per_sec(kph * 1000.0 / 3600.0)
    }

    #[inline]
    pub fn meters_per_sec(self) -> f64 {
        self.meters_per_sec
    }

    #[inline]
    pub fn kph(self) -> f64 {
        self.meters_per_sec * 3.6
    }

    /// The slower of two speeds — used when aggregating min-max-speed along
    /// a multi-edge path.
    pub fn min(self, other: Speed) -> Speed {
        if self.meters_per_sec <= other.meters_per_sec {
            self
        } else {
            other
        }
    }
}

impl std::ops::Mul<Time> for Speed {
    type Output = Distance;
    fn mul(self, rhs: Time) -> Distance {
        Distance::from_meters(self.meters_per_sec * rhs.seconds())
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} km/h", self.kph())
    }
}
