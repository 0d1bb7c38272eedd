//! Aggregate statistics over a finished set of routes.

use traffic_assign::Route;
use traffic_core::Time;

/// Top-line statistics for one assignment run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub mean_travel_time: Time,
    pub route_count: usize,
}

/// Summarize a finished set of routes. `mean_travel_time` is `Time::ZERO`
/// when `routes` is empty — never a divide-by-zero panic.
pub fn summarize(routes: &[Route]) -> Summary {
    if routes.is_empty() {
        return Summary { mean_travel_time: Time::ZERO, route_count: 0 };
    }
    let total = Time::sum(routes.iter().map(|r| r.estimated_travel_time));
    Summary {
        mean_travel_time: Time::from_seconds(total.seconds() / routes.len() as f64),
        route_count: routes.len(),
    }
}
