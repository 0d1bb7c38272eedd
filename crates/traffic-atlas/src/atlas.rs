//! `PathAtlas` construction: shortest road-graph paths between neighboring
//! cluster centroids.

use std::collections::BTreeMap;

use h3o::CellIndex;

use traffic_cluster::Cluster;
use traffic_core::{ClusterId, NodeId};
use traffic_roadgraph::RoadGraph;

use crate::error::{AtlasError, AtlasResult};

/// Minimum node count for an atlas path to be accepted. A shorter path
/// indicates both cluster centroids snapped to the same (or adjacent, with
/// no intermediate) road node — a degenerate snap rather than a real
/// inter-cluster corridor.
const MIN_PATH_NODES: usize = 3;

/// Diagnostics accumulated while building a [`PathAtlas`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AtlasDiagnostics {
    /// Candidate paths rejected for having fewer than `MIN_PATH_NODES` nodes.
    pub degenerate_paths: usize,
    /// Neighbor pairs with no road-graph path between their centroids.
    pub unreachable_pairs: usize,
}

/// A symmetric map from unordered cluster pairs to the road-node path
/// connecting their centroids. `atlas.get(a, b)` and `atlas.get(b, a)` are
/// always either both present (with reversed node order) or both absent.
#[derive(Debug, Clone, Default)]
pub struct PathAtlas {
    paths: BTreeMap<(ClusterId, ClusterId), Vec<NodeId>>,
}

impl PathAtlas {
    /// Look up the road-node path from `from` to `to`, if one was recorded.
    pub fn get(&self, from: ClusterId, to: ClusterId) -> Option<&[NodeId]> {
        self.paths.get(&(from, to)).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        // Each recorded corridor contributes two directed entries.
        self.paths.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over directed `(from, to, path)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (ClusterId, ClusterId, &[NodeId])> {
        self.paths.iter().map(|(&(a, b), path)| (a, b, path.as_slice()))
    }
}

/// Build the atlas from consolidated clusters and a routable road graph.
///
/// Unreachable neighbor pairs and degenerate (< 3 node) paths are dropped
/// silently, per the atlas's failure-mode contract; their counts are
/// returned in [`AtlasDiagnostics`] rather than surfaced as errors.
pub fn build_atlas(
    clusters: &[Cluster],
    road_graph: &RoadGraph,
) -> AtlasResult<(PathAtlas, AtlasDiagnostics)> {
    let centroid_node: BTreeMap<ClusterId, NodeId> = clusters
        .iter()
        .map(|c| {
            road_graph
                .nearest_node(c.centre)
                .map(|n| (c.cell_id, n))
                .ok_or_else(|| {
                    AtlasError::InvalidInput(format!(
                        "cluster {} has no reachable road node; road graph is empty",
                        c.cell_id
                    ))
                })
        })
        .collect::<AtlasResult<_>>()?;

    let cluster_ids: std::collections::BTreeSet<ClusterId> =
        clusters.iter().map(|c| c.cell_id).collect();

    let mut atlas = PathAtlas::default();
    let mut diag = AtlasDiagnostics::default();
    let mut visited: std::collections::BTreeSet<(ClusterId, ClusterId)> = std::collections::BTreeSet::new();

    for cluster in clusters {
        let a = cluster.cell_id;
        for b in neighbours(a, &cluster_ids) {
            if a == b {
                continue;
            }
            let key = if a < b { (a, b) } else { (b, a) };
            if !visited.insert(key) {
                continue;
            }

            let from_node = centroid_node[&a];
            let to_node = centroid_node[&b];

            match road_graph.shortest_path(from_node, to_node) {
                Ok(path) if path.nodes.len() >= MIN_PATH_NODES => {
                    atlas.paths.insert((a, b), path.nodes.clone());
                    let mut reversed = path.nodes;
                    reversed.reverse();
                    atlas.paths.insert((b, a), reversed);
                }
                Ok(_) => diag.degenerate_paths += 1,
                Err(_) => diag.unreachable_pairs += 1,
            }
        }
    }

    Ok((atlas, diag))
}

/// Cells within H3 k-ring distance 1 of `cell`, restricted to the cluster
/// set, excluding `cell` itself.
fn neighbours(
    cell: ClusterId,
    cluster_ids: &std::collections::BTreeSet<ClusterId>,
) -> Vec<ClusterId> {
    let ring: Vec<CellIndex> = cell.cell().grid_disk(1);
    ring.into_iter()
        .map(ClusterId::from)
        .filter(|c| *c != cell && cluster_ids.contains(c))
        .collect()
}
