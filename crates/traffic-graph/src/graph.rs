//! `ClusterGraph` construction and CSR adjacency.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use h3o::{LatLng, Resolution};

use traffic_atlas::PathAtlas;
use traffic_cluster::Cluster;
use traffic_core::{ClusterId, Distance, NodeId, Speed};
use traffic_roadgraph::RoadGraph;

use crate::error::{GraphError, GraphResult};
use crate::link::{LinkState, PathData};

/// Identifies one directed edge in a [`ClusterGraph`] — a position in its
/// CSR edge arrays, not a dense allocation-order id like `traffic-core`'s
/// `typed_id!` wrappers, since edges are only ever enumerated in CSR order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct LinkId(pub u32);

impl LinkId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinkId({})", self.0)
    }
}

/// Directed graph over `ClusterId` with a [`LinkState`] on every edge.
///
/// Nodes are kept in sorted `ClusterId` order so that iteration and Dijkstra
/// tie-breaking are deterministic independent of input order.
pub struct ClusterGraph {
    nodes: Vec<ClusterId>,
    node_index: BTreeMap<ClusterId, usize>,
    /// CSR row pointer, length `nodes.len() + 1`.
    out_start: Vec<u32>,
    /// Destination node index for each `LinkId`.
    edge_to: Vec<usize>,
    links: Vec<LinkState>,
}

impl ClusterGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[ClusterId] {
        &self.nodes
    }

    pub fn index_of(&self, id: ClusterId) -> Option<usize> {
        self.node_index.get(&id).copied()
    }

    pub fn cluster_at(&self, index: usize) -> ClusterId {
        self.nodes[index]
    }

    /// Iterator over the outgoing `LinkId`s of the node at `index`.
    #[inline]
    pub fn out_edges(&self, index: usize) -> impl Iterator<Item = LinkId> + '_ {
        let start = self.out_start[index] as usize;
        let end = self.out_start[index + 1] as usize;
        (start..end).map(|i| LinkId(i as u32))
    }

    pub fn edge_target(&self, link: LinkId) -> usize {
        self.edge_to[link.index()]
    }

    pub fn link(&self, link: LinkId) -> &LinkState {
        &self.links[link.index()]
    }

    pub fn link_mut(&mut self, link: LinkId) -> &mut LinkState {
        &mut self.links[link.index()]
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn links(&self) -> impl Iterator<Item = (LinkId, &LinkState)> {
        self.links.iter().enumerate().map(|(i, l)| (LinkId(i as u32), l))
    }
}

/// Build a [`ClusterGraph`] from an atlas and the road graph it was derived
/// from. Every directed atlas entry becomes one edge.
pub fn build_cluster_graph(
    clusters: &[Cluster],
    atlas: &PathAtlas,
    road_graph: &RoadGraph,
    resolution: Resolution,
) -> GraphResult<ClusterGraph> {
    let cluster_ids: BTreeSet<ClusterId> = clusters.iter().map(|c| c.cell_id).collect();
    let nodes: Vec<ClusterId> = cluster_ids.iter().copied().collect();
    let node_index: BTreeMap<ClusterId, usize> =
        nodes.iter().enumerate().map(|(i, &id)| (id, i)).collect();

    let mut raw_edges: Vec<(ClusterId, ClusterId, PathData)> = Vec::new();
    for (a, b, path_nodes) in atlas.iter() {
        let path_data = compute_path_data(a, b, path_nodes, road_graph, resolution, &cluster_ids)?;
        raw_edges.push((a, b, path_data));
    }

    raw_edges.sort_by_key(|(a, b, _)| (node_index[a], node_index[b]));

    let mut out_start = vec![0u32; nodes.len() + 1];
    for (a, _, _) in &raw_edges {
        out_start[node_index[a] + 1] += 1;
    }
    for i in 1..=nodes.len() {
        out_start[i] += out_start[i - 1];
    }

    let edge_to: Vec<usize> = raw_edges.iter().map(|(_, b, _)| node_index[b]).collect();
    let links: Vec<LinkState> = raw_edges.into_iter().map(|(_, _, pd)| LinkState::new(pd)).collect();

    Ok(ClusterGraph { nodes, node_index, out_start, edge_to, links })
}

/// Aggregate road-path attributes into one [`PathData`] entry.
fn compute_path_data(
    start: ClusterId,
    end: ClusterId,
    path_nodes: &[NodeId],
    road_graph: &RoadGraph,
    resolution: Resolution,
    cluster_ids: &BTreeSet<ClusterId>,
) -> GraphResult<PathData> {
    if path_nodes.len() < 2 {
        return Err(GraphError::InvalidInput(format!(
            "atlas path {start}->{end} has fewer than 2 nodes"
        )));
    }

    let mut total_length = Distance::ZERO;
    let mut min_speed: Option<Speed> = None;
    let mut min_lanes = u32::MAX;

    for window in path_nodes.windows(2) {
        let (u, v) = (window[0], window[1]);
        let edge = road_graph.edge_between(u, v).ok_or_else(|| {
            GraphError::InvalidInput(format!("no road edge between consecutive path nodes {u}->{v}"))
        })?;
        total_length = total_length + road_graph.edge_length[edge.index()];
        let speed = road_graph.edge_speed[edge.index()];
        min_speed = Some(match min_speed {
            Some(s) => s.min(speed),
            None => speed,
        });
        min_lanes = min_lanes.min(road_graph.edge_lanes[edge.index()]);
    }

    let min_max_speed = min_speed.expect("path has at least one edge");
    let crosses_other_clusters =
        !path_crosses_extra_clusters(path_nodes, road_graph, resolution, cluster_ids, start, end)?;

    Ok(PathData::new(
        start,
        end,
        total_length,
        min_max_speed,
        min_lanes,
        crosses_other_clusters,
        path_nodes.to_vec(),
    ))
}

/// Projects every path node onto its H3 cell at `resolution`, keeps only
/// cells present in the cluster set, compresses consecutive duplicates, and
/// returns `true` if the resulting sequence is anything other than exactly
/// `[start, end]` — i.e. the path cuts through a third cluster's territory.
/// Callers negate this to get `PathData::crosses_other_clusters`, whose
/// name describes the opposite condition (see its doc comment).
fn path_crosses_extra_clusters(
    path_nodes: &[NodeId],
    road_graph: &RoadGraph,
    resolution: Resolution,
    cluster_ids: &BTreeSet<ClusterId>,
    start: ClusterId,
    end: ClusterId,
) -> GraphResult<bool> {
    let mut sequence: Vec<ClusterId> = Vec::new();
    for &node in path_nodes {
        let pos = road_graph.node_pos[node.index()];
        let ll: LatLng = pos
            .try_into()
            .map_err(|e| GraphError::InvalidInput(format!("road node {node} has invalid position: {e}")))?;
        let cell = ClusterId::from(ll.to_cell(resolution));
        if !cluster_ids.contains(&cell) {
            continue;
        }
        if sequence.last() != Some(&cell) {
            sequence.push(cell);
        }
    }
    Ok(sequence != vec![start, end])
}
