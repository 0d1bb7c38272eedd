//! Hex clustering and consolidation.

use std::collections::BTreeMap;

use h3o::{LatLng, Resolution};

use traffic_core::{ClusterId, Coordinates};
use traffic_roadgraph::RoadGraph;

use crate::cluster::{Cluster, ClusterCentreStrategy};
use crate::error::{ClusterError, ClusterResult};

/// Counts of clusters dropped during [`consolidate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsolidateDiagnostics {
    /// Clusters whose centre snapped to a road node outside the cluster set.
    pub discarded: usize,
}

/// Bucket points by H3 cell at `resolution` and compute one [`Cluster`] per
/// bucket, keyed by cell id. Iteration order of the input is not observable
/// in the output; callers key by [`ClusterId`].
///
/// Every input point belongs to exactly one emitted cluster (cluster
/// partition invariant).
pub fn clusterize(
    points: &[Coordinates],
    resolution: Resolution,
    strategy: ClusterCentreStrategy,
) -> ClusterResult<Vec<Cluster>> {
    let mut points_by_cell: BTreeMap<ClusterId, Vec<Coordinates>> = BTreeMap::new();

    for &point in points {
        let ll: LatLng = point.try_into().map_err(|e| {
            ClusterError::InvalidInput(format!("point {point} is not a valid lat/lon: {e}"))
        })?;
        let cell = ClusterId::from(ll.to_cell(resolution));
        points_by_cell.entry(cell).or_default().push(point);
    }

    points_by_cell
        .into_iter()
        .map(|(cell_id, pts)| {
            let centre = match strategy {
                ClusterCentreStrategy::Mean => {
                    Coordinates::mean(&pts).expect("bucket is non-empty by construction")
                }
                ClusterCentreStrategy::HexagonCenter => cell_id.centre(),
            };
            Ok(Cluster::new(cell_id, centre, pts))
        })
        .collect()
}

/// Drop clusters whose centre does not snap to a road node lying back inside
/// the cluster set, merging the survivors' points into the target cluster.
///
/// For each cluster: snap its centre to the nearest road node, and compute
/// `target = H3(node position, resolution)`. If `target` is itself one of
/// the input clusters, the cluster's points are folded into the output entry
/// for `target`, which otherwise keeps `target`'s own original centre. A
/// cluster whose snapped node lands outside the cluster set entirely is
/// discarded.
pub fn consolidate(
    clusters: &[Cluster],
    road_graph: &RoadGraph,
    resolution: Resolution,
) -> ClusterResult<(Vec<Cluster>, ConsolidateDiagnostics)> {
    let by_id: BTreeMap<ClusterId, &Cluster> =
        clusters.iter().map(|c| (c.cell_id, c)).collect();

    let mut groups: BTreeMap<ClusterId, Vec<&Cluster>> = BTreeMap::new();
    let mut discarded = 0usize;

    for cluster in clusters {
        let Some(node) = road_graph.nearest_node(cluster.centre) else {
            discarded += 1;
            continue;
        };
        let node_pos = road_graph.node_pos[node.index()];
        let ll: LatLng = node_pos.try_into().map_err(|e| {
            ClusterError::InvalidInput(format!("road node position is invalid: {e}"))
        })?;
        let target = ClusterId::from(ll.to_cell(resolution));

        if by_id.contains_key(&target) {
            groups.entry(target).or_default().push(cluster);
        } else {
            discarded += 1;
        }
    }

    let merged = groups
        .into_iter()
        .map(|(target_id, subcluster_group)| {
            let centre = by_id[&target_id].centre;
            let points: Vec<Coordinates> = subcluster_group
                .iter()
                .flat_map(|c| c.points.iter().copied())
                .collect();
            Cluster::new(target_id, centre, points)
        })
        .collect();

    Ok((merged, ConsolidateDiagnostics { discarded }))
}
