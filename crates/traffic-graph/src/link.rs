//! `PathData` and `LinkState` — the per-edge attributes of a [`crate::ClusterGraph`]
//! and the BPR volume-delay function.

use traffic_core::{ClusterId, Distance, NodeId, Speed, Time, TravelId};

/// Capacity contributed per lane, in vehicles/hour.
const CAPACITY_PER_LANE: u32 = 2_200;

/// BPR alpha coefficient.
const BPR_ALPHA: f64 = 0.15;
/// BPR beta exponent.
const BPR_BETA: i32 = 4;

/// Immutable attributes of one inter-cluster corridor, aggregated from the
/// underlying road path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathData {
    pub start_cluster: ClusterId,
    pub end_cluster: ClusterId,
    pub total_length: Distance,
    pub min_max_speed: Speed,
    pub min_lane_count: u32,
    pub free_flow_travel_time: Time,
    pub max_capacity: u32,
    /// `true` iff the underlying road path, compressed to distinct clusters
    /// it passes through, visits exactly `[start_cluster, end_cluster]` —
    /// i.e. it does not cut through a third cluster's territory.
    pub crosses_other_clusters: bool,
    /// The underlying road-graph node path this link aggregates, in travel
    /// order — carried through so a read-only edge view can report it.
    pub path_nodes: Vec<NodeId>,
}

impl PathData {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_cluster: ClusterId,
        end_cluster: ClusterId,
        total_length: Distance,
        min_max_speed: Speed,
        min_lane_count: u32,
        crosses_other_clusters: bool,
        path_nodes: Vec<NodeId>,
    ) -> Self {
        let free_flow_travel_time = total_length / min_max_speed;
        let max_capacity = min_lane_count * CAPACITY_PER_LANE;
        Self {
            start_cluster,
            end_cluster,
            total_length,
            min_max_speed,
            min_lane_count,
            free_flow_travel_time,
            max_capacity,
            crosses_other_clusters,
            path_nodes,
        }
    }
}

/// Mutable per-edge state: the immutable [`PathData`] plus the set of
/// travels currently assigned to this link.
#[derive(Debug, Clone)]
pub struct LinkState {
    pub path_data: PathData,
    current_volume: Vec<TravelId>,
}

impl LinkState {
    pub fn new(path_data: PathData) -> Self {
        Self { path_data, current_volume: Vec::new() }
    }

    pub fn volume(&self) -> usize {
        self.current_volume.len()
    }

    pub fn current_volume(&self) -> &[TravelId] {
        &self.current_volume
    }

    pub fn contains(&self, travel: TravelId) -> bool {
        self.current_volume.contains(&travel)
    }

    /// Add `travel` to this link's volume. A no-op if it is already present,
    /// preserving the idempotence-of-reassignment invariant.
    pub fn assign(&mut self, travel: TravelId) {
        if !self.contains(travel) {
            self.current_volume.push(travel);
        }
    }

    /// Remove `travel` from this link's volume, if present.
    pub fn unassign(&mut self, travel: TravelId) {
        self.current_volume.retain(|&t| t != travel);
    }

    /// BPR volume-delay travel time for the current load.
    ///
    /// Strictly increasing in volume for fixed `free_flow_travel_time` and
    /// `max_capacity`; always `>= free_flow_travel_time`.
    pub fn travel_time(&self) -> Time {
        let v = self.current_volume.len() as f64;
        let c = self.path_data.max_capacity as f64;
        let ratio = if c > 0.0 { v / c } else { 0.0 };
        self.path_data.free_flow_travel_time * (1.0 + BPR_ALPHA * ratio.powi(BPR_BETA))
    }
}
