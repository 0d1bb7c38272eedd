//! Single-source Dijkstra over a [`ClusterGraph`], weighted by each link's
//! current BPR travel time.
//!
//! Weights are derived on demand from `LinkState::travel_time()` rather than
//! cached in a separate array — the `current_volume` driving them is frozen
//! for the duration of one all-pairs computation: every tree in a batch is
//! computed before any volume mutation begins.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use traffic_graph::{ClusterGraph, LinkId};

/// Wraps `f64` with a total order for use as a `BinaryHeap` key. Travel
/// times are always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OrderedF64(f64);

impl Eq for OrderedF64 {}
impl PartialOrd for OrderedF64 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for OrderedF64 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(std::cmp::Ordering::Equal)
    }
}

/// A shortest-path tree rooted at one node index, for a single all-pairs
/// computation round.
pub struct DijkstraTree {
    source: usize,
    dist: Vec<f64>,
    prev_link: Vec<Option<LinkId>>,
}

impl DijkstraTree {
    /// Run Dijkstra from `source` over `graph`'s current link weights.
    ///
    /// Ties in the heap are broken by node index, which tracks sorted
    /// `ClusterId` order — the stable cluster-id tie-break the assignment
    /// engine's determinism guarantee relies on.
    pub fn compute(graph: &ClusterGraph, source: usize) -> Self {
        let n = graph.node_count();
        let mut dist = vec![f64::INFINITY; n];
        let mut prev_link: Vec<Option<LinkId>> = vec![None; n];
        dist[source] = 0.0;

        let mut heap: BinaryHeap<Reverse<(OrderedF64, usize)>> = BinaryHeap::new();
        heap.push(Reverse((OrderedF64(0.0), source)));

        while let Some(Reverse((OrderedF64(cost), node))) = heap.pop() {
            if cost > dist[node] {
                continue;
            }
            for link in graph.out_edges(node) {
                let target = graph.edge_target(link);
                let weight = graph.link(link).travel_time().seconds();
                let new_cost = cost + weight;
                if new_cost < dist[target] {
                    dist[target] = new_cost;
                    prev_link[target] = Some(link);
                    heap.push(Reverse((OrderedF64(new_cost), target)));
                }
            }
        }

        DijkstraTree { source, dist, prev_link }
    }

    /// Reconstruct the link sequence from `self.source` to `target`.
    ///
    /// `Some(vec![])` for `target == source` (a trivial, zero-link route),
    /// `None` if `target` is unreachable.
    pub fn path_to(&self, graph: &ClusterGraph, target: usize) -> Option<Vec<LinkId>> {
        if target == self.source {
            return Some(Vec::new());
        }
        if !self.dist[target].is_finite() {
            return None;
        }

        let mut links = Vec::new();
        let mut cur = target;
        while cur != self.source {
            let link = self.prev_link[cur]?;
            links.push(link);
            cur = graph.index_of(graph.link(link).path_data.start_cluster)?;
        }
        links.reverse();
        Some(links)
    }
}
