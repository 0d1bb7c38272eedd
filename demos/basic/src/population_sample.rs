//! Epicentre -> `Coordinates` sampling.
//!
//! `traffic-demand::population` stops at a validated, in-memory
//! `PopulationConfig`; the actual sampling routine lives here, in the one
//! runnable binary that needs it.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use traffic_core::{meters_to_degrees, Coordinates};
use traffic_demand::Epicentre;

/// Draw `epicentre.population_count` points normally distributed around the
/// epicentre, with `radius` (converted to degrees) as the standard deviation
/// on each axis independently.
pub fn generate_data_points(epicentre: &Epicentre, rng: &mut impl Rng) -> Vec<Coordinates> {
    let sigma_deg = meters_to_degrees(epicentre.radius);
    let lat_dist = Normal::new(epicentre.latitude, sigma_deg).expect("finite, positive sigma");
    let lon_dist = Normal::new(epicentre.longitude, sigma_deg).expect("finite, positive sigma");

    (0..epicentre.population_count)
        .map(|_| Coordinates::new(lat_dist.sample(rng), lon_dist.sample(rng)))
        .collect()
}
