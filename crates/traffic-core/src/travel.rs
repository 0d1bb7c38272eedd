//! `Travel` — a single origin-destination demand, shared by the travel
//! generator (producer) and the assignment engine (consumer).

use crate::ids::{ClusterId, TravelId};

/// One origin-destination demand. `id` is unique within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Travel {
    pub id: TravelId,
    pub start_cluster: ClusterId,
    pub end_cluster: ClusterId,
}

impl Travel {
    pub fn new(id: TravelId, start_cluster: ClusterId, end_cluster: ClusterId) -> Self {
        Self { id, start_cluster, end_cluster }
    }

    /// `true` if origin and destination are the same cluster.
    pub fn is_trivial(&self) -> bool {
        self.start_cluster == self.end_cluster
    }
}
