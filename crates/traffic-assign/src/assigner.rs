//! The incremental batched route assignment engine.

use std::collections::HashMap;

use h3o::Resolution;

use traffic_atlas::{build_atlas, AtlasDiagnostics};
use traffic_cluster::Cluster;
use traffic_core::{Time, TravelId};
use traffic_graph::{build_cluster_graph, ClusterGraph, LinkId};
use traffic_roadgraph::RoadGraph;

use crate::dijkstra::DijkstraTree;
use crate::error::{AssignError, AssignResult};
use crate::travel::{Route, Travel};

/// Counts of dropped work, surfaced instead of logged — degenerate and
/// unreachable conditions are expected features of real-world input and
/// never halt the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignDiagnostics {
    pub total_travels: usize,
    pub routed_travels: usize,
    /// Travels whose origin and destination are disconnected in the final
    /// `ClusterGraph` — no `Route` was emitted for these.
    pub dropped_travels: usize,
    /// Diagnostics from building the path atlas that backs the cluster
    /// graph (degenerate/unreachable neighbor pairs).
    pub atlas: AtlasDiagnostics,
}

/// The result of one `assign_routes` call.
pub struct Assignment {
    pub routes: Vec<Route>,
    /// Read-only final state of the cluster graph — volumes, travel times,
    /// and paths per link.
    pub graph: ClusterGraph,
    pub diagnostics: AssignDiagnostics,
}

/// Pluggable route assignment strategy.
///
/// `IncrementalBatched` is the only implementation specified here; other
/// strategies (e.g. a one-shot all-or-nothing assignment) can implement this
/// trait without touching the cluster-graph or link-cost machinery.
pub trait TravelRouteAssigner {
    fn assign_routes(
        &self,
        travels: &[Travel],
        clusters: &[Cluster],
        road_graph: &RoadGraph,
    ) -> AssignResult<Assignment>;
}

/// Partition `travels` into consecutive batches of `batch_size` (the last
/// batch may be smaller). Batch order is the input order.
pub fn batched(travels: &[Travel], batch_size: usize) -> impl Iterator<Item = &[Travel]> {
    travels.chunks(batch_size.max(1))
}

/// Iterative, load-sensitive all-pairs shortest-path routing procedure that
/// approximates user equilibrium without guaranteeing convergence.
#[derive(Debug, Clone, Copy)]
pub struct IncrementalBatchedAssigner {
    h3_resolution: Resolution,
    batch_size: usize,
    iterations_count: usize,
}

impl IncrementalBatchedAssigner {
    pub fn new(
        h3_resolution: Resolution,
        batch_size: usize,
        iterations_count: usize,
    ) -> AssignResult<Self> {
        if batch_size == 0 {
            return Err(AssignError::InvalidInput("batch_size must be >= 1".into()));
        }
        if iterations_count == 0 {
            return Err(AssignError::InvalidInput("iterations_count must be >= 1".into()));
        }
        Ok(Self { h3_resolution, batch_size, iterations_count })
    }

    pub fn h3_resolution(&self) -> Resolution {
        self.h3_resolution
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn iterations_count(&self) -> usize {
        self.iterations_count
    }
}

impl TravelRouteAssigner for IncrementalBatchedAssigner {
    fn assign_routes(
        &self,
        travels: &[Travel],
        clusters: &[Cluster],
        road_graph: &RoadGraph,
    ) -> AssignResult<Assignment> {
        let (atlas, atlas_diag) = build_atlas(clusters, road_graph)?;
        let mut graph = build_cluster_graph(clusters, &atlas, road_graph, self.h3_resolution)?;

        // TravelId -> the link path currently assigned to it, so it can be
        // unassigned before a later batch reassigns it to a fresh path.
        let mut current_routes: HashMap<TravelId, Vec<LinkId>> = HashMap::new();

        for _iteration in 0..self.iterations_count {
            for batch in batched(travels, self.batch_size) {
                self.process_batch(batch, &mut graph, &mut current_routes);
            }
        }

        let routes = emit_routes(travels, &graph, &current_routes);
        let diagnostics = AssignDiagnostics {
            total_travels: travels.len(),
            routed_travels: routes.len(),
            dropped_travels: travels.len() - routes.len(),
            atlas: atlas_diag,
        };

        Ok(Assignment { routes, graph, diagnostics })
    }
}

impl IncrementalBatchedAssigner {
    /// Compute all-pairs shortest paths for this batch's distinct sources,
    /// then sequentially unassign/assign every travel in input order before
    /// refreshing weights for the next batch.
    fn process_batch(
        &self,
        batch: &[Travel],
        graph: &mut ClusterGraph,
        current_routes: &mut HashMap<TravelId, Vec<LinkId>>,
    ) {
        let trees = self.compute_trees(batch, graph);

        for travel in batch {
            let (Some(from_idx), Some(to_idx)) =
                (graph.index_of(travel.start_cluster), graph.index_of(travel.end_cluster))
            else {
                continue;
            };

            let Some(tree) = trees.get(&from_idx) else { continue };
            let Some(new_path) = tree.path_to(graph, to_idx) else {
                // No path exists this round. Unassign any stale prior route
                // (the OD pair may have been connected earlier and lost
                // connectivity — not possible once volumes only add/remove
                // travels on a fixed topology, but harmless to guard here).
                if let Some(prev) = current_routes.remove(&travel.id) {
                    unassign_path(graph, &prev, travel.id);
                }
                continue;
            };

            if current_routes.get(&travel.id) == Some(&new_path) {
                continue; // idempotent: already on this exact path.
            }

            if let Some(prev) = current_routes.remove(&travel.id) {
                unassign_path(graph, &prev, travel.id);
            }
            assign_path(graph, &new_path, travel.id);
            current_routes.insert(travel.id, new_path);
        }

        // Edge weights are derived on demand from `LinkState::travel_time()`,
        // so the now-updated volumes are already reflected for the next
        // batch — no separate refresh pass is needed.
    }

    #[cfg(not(feature = "parallel"))]
    fn compute_trees(
        &self,
        batch: &[Travel],
        graph: &ClusterGraph,
    ) -> HashMap<usize, DijkstraTree> {
        let sources: std::collections::BTreeSet<usize> =
            batch.iter().filter_map(|t| graph.index_of(t.start_cluster)).collect();
        sources.into_iter().map(|s| (s, DijkstraTree::compute(graph, s))).collect()
    }

    #[cfg(feature = "parallel")]
    fn compute_trees(
        &self,
        batch: &[Travel],
        graph: &ClusterGraph,
    ) -> HashMap<usize, DijkstraTree> {
        use rayon::prelude::*;

        let sources: Vec<usize> =
            batch.iter().filter_map(|t| graph.index_of(t.start_cluster)).collect::<std::collections::BTreeSet<_>>().into_iter().collect();

        // Each source's tree is independent of the others; the result is
        // collected into a plain HashMap before any mutation begins, so the
        // sequential apply phase below sees a deterministic snapshot.
        sources
            .into_par_iter()
            .map(|s| (s, DijkstraTree::compute(graph, s)))
            .collect()
    }
}

fn assign_path(graph: &mut ClusterGraph, path: &[LinkId], travel: TravelId) {
    for &link in path {
        graph.link_mut(link).assign(travel);
    }
}

fn unassign_path(graph: &mut ClusterGraph, path: &[LinkId], travel: TravelId) {
    for &link in path {
        graph.link_mut(link).unassign(travel);
    }
}

/// Build the final `Route` for every travel that holds an assigned path.
fn emit_routes(
    travels: &[Travel],
    graph: &ClusterGraph,
    current_routes: &HashMap<TravelId, Vec<LinkId>>,
) -> Vec<Route> {
    travels
        .iter()
        .filter_map(|travel| {
            let path = current_routes.get(&travel.id)?;

            let mut total = Time::ZERO;
            let mut nodes = Vec::with_capacity(path.len() + 1);
            for (i, &link_id) in path.iter().enumerate() {
                let link = graph.link(link_id);
                if i == 0 {
                    nodes.push(link.path_data.start_cluster);
                }
                nodes.push(link.path_data.end_cluster);
                total = total + link.travel_time();
            }
            if path.is_empty() {
                nodes.push(travel.start_cluster);
            }

            Some(Route { travel: travel.id, estimated_travel_time: total, nodes })
        })
        .collect()
}
