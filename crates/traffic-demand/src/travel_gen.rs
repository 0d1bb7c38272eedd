//! Travel demand generation: each cluster emits travels proportional to its
//! population, routed to destinations weighted by the destination cluster's
//! own population.

use rand::distributions::{Distribution, WeightedIndex};

use traffic_cluster::Cluster;
use traffic_core::{ScopedRng, Travel, TravelId};

use crate::error::{DemandError, DemandResult};

/// Engine-scoped monotonic counter for `TravelId`s.
///
/// A `&mut TravelIdCounter` is threaded through generation explicitly rather
/// than a process-wide `static` — a run that generates demand twice (e.g. for
/// two time-of-day configurations) gets the caller's choice of whether the
/// second call continues the sequence or restarts it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TravelIdCounter(u32);

impl TravelIdCounter {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn next(&mut self) -> TravelId {
        let id = TravelId(self.0);
        self.0 += 1;
        id
    }
}

/// Generate travels for every cluster: `round(|cluster.points| *
/// travel_coefficient)` travels originate at each cluster, each destined for
/// a cluster sampled with probability proportional to the destination's own
/// point count.
///
/// `seed` drives one [`ScopedRng`] per origin cluster (scoped by that
/// cluster's position in `clusters`), so regenerating demand for the same
/// clusters and seed reproduces identical travels.
pub fn generate_travels(
    clusters: &[Cluster],
    travel_coefficient: f64,
    seed: u64,
    counter: &mut TravelIdCounter,
) -> DemandResult<Vec<Travel>> {
    if !(travel_coefficient >= 0.0) || !travel_coefficient.is_finite() {
        return Err(DemandError::InvalidInput(format!(
            "travel_coefficient must be finite and non-negative, got {travel_coefficient}"
        )));
    }
    if clusters.is_empty() {
        return Ok(Vec::new());
    }

    let weights: Vec<usize> = clusters.iter().map(Cluster::point_count).collect();
    let destination_index = WeightedIndex::new(&weights).map_err(|e| {
        DemandError::InvalidInput(format!("no cluster has any population to route towards: {e}"))
    })?;

    let mut travels = Vec::new();
    for (i, cluster) in clusters.iter().enumerate() {
        let count = (cluster.point_count() as f64 * travel_coefficient).round() as usize;
        if count == 0 {
            continue;
        }
        let mut rng = ScopedRng::new(seed, i as u64);
        for _ in 0..count {
            let dest = &clusters[destination_index.sample(rng.inner())];
            travels.push(Travel {
                id: counter.next(),
                start_cluster: cluster.cell_id,
                end_cluster: dest.cell_id,
            });
        }
    }

    Ok(travels)
}
