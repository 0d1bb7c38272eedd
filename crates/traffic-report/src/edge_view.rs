//! Read-only per-edge view of a finished [`ClusterGraph`].

use traffic_core::{ClusterId, NodeId, Time};
use traffic_graph::ClusterGraph;

/// One link's final state: its load-dependent travel time, free-flow
/// baseline, capacity, volume, and the road-node path it aggregates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeView {
    pub start: ClusterId,
    pub end: ClusterId,
    pub travel_time: Time,
    pub free_flow_travel_time: Time,
    pub capacity: u32,
    pub volume: usize,
    pub path: Vec<NodeId>,
}

/// Build a read-only view of every link in `graph`, in CSR (source-node,
/// then insertion) order.
pub fn edge_view(graph: &ClusterGraph) -> Vec<EdgeView> {
    graph
        .links()
        .map(|(_, link)| EdgeView {
            start: link.path_data.start_cluster,
            end: link.path_data.end_cluster,
            travel_time: link.travel_time(),
            free_flow_travel_time: link.path_data.free_flow_travel_time,
            capacity: link.path_data.max_capacity,
            volume: link.volume(),
            path: link.path_data.path_nodes.clone(),
        })
        .collect()
}
