//! `Route` — the assignment engine's output unit. `Travel`, the input unit,
//! lives in `traffic-core` since the travel generator also produces it.

use traffic_core::{ClusterId, Time, TravelId};

pub use traffic_core::Travel;

/// The routing result for one [`Travel`]: its estimated travel time under
/// the final link weights, and the ordered cluster sequence it traverses.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub travel: TravelId,
    pub estimated_travel_time: Time,
    pub nodes: Vec<ClusterId>,
}
