//! Road network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_from[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays are sorted by source node and indexed by `EdgeId`.
//! Iteration over a node's outgoing edges is therefore a contiguous memory
//! scan — ideal for Dijkstra's inner loop.
//!
//! # Multigraph
//!
//! The input contract (road-graph ingestion is an external collaborator) is a
//! directed multigraph: more than one edge may connect the same ordered pair
//! of nodes. [`RoadGraph::edge_between`] resolves such parallel edges by
//! picking the shortest one, which is also what Dijkstra would have chosen
//! had it traversed that hop.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest `NodeId`. Used to
//! snap cluster centres to road nodes.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use traffic_core::{Coordinates, Distance, EdgeId, NodeId, Speed};

use crate::error::{RoadGraphError, RoadGraphResult};

// ── R-tree node entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2], // [lat, lon]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Directed road graph in CSR format plus a spatial index for node snapping.
///
/// All fields are `pub` for direct indexed access on hot paths. Do not
/// construct directly; use [`RoadGraphBuilder`].
pub struct RoadGraph {
    /// Geographic position of each node. Indexed by `NodeId`.
    pub node_pos: Vec<Coordinates>,

    /// CSR row pointer. Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`. Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Source node of each edge (redundant with CSR, needed for
    /// path reconstruction).
    pub edge_from: Vec<NodeId>,
    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,
    /// Length of each edge.
    pub edge_length: Vec<Distance>,
    /// Speed limit of each edge.
    pub edge_speed: Vec<Speed>,
    /// Lane count of each edge (>= 1).
    pub edge_lanes: Vec<u32>,

    spatial_idx: RTree<NodeEntry>,
}

/// A shortest-path result: the nodes visited, in order, and the specific
/// edge traversed at each hop.
#[derive(Debug, Clone)]
pub struct Path {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<EdgeId>,
    pub total_length: Distance,
}

impl Path {
    /// `true` if source and destination coincide (no edges traversed).
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

impl RoadGraph {
    /// Construct an empty network with no nodes or edges.
    pub fn empty() -> Self {
        RoadGraphBuilder::new().build().expect("empty build never fails validation")
    }

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// Resolve a specific `from -> to` edge from a possibly-parallel set,
    /// picking the shortest candidate.
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.out_edges(from)
            .filter(|&e| self.edge_to[e.index()] == to)
            .min_by(|&a, &b| {
                self.edge_length[a.index()]
                    .meters()
                    .partial_cmp(&self.edge_length[b.index()].meters())
                    .unwrap()
            })
    }

    /// Return the `NodeId` of the nearest road node to `pos`.
    ///
    /// Returns `None` only if the network has no nodes.
    pub fn nearest_node(&self, pos: Coordinates) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| e.id)
    }

    /// Return up to `k` nearest nodes to `pos`, sorted by ascending distance.
    pub fn k_nearest_nodes(&self, pos: Coordinates, k: usize) -> Vec<NodeId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.lat, pos.lon])
            .take(k)
            .map(|e| e.id)
            .collect()
    }

    /// Dijkstra shortest path from `from` to `to`, weighted by edge length.
    ///
    /// `from == to` yields a trivial (empty) path. Returns
    /// `RoadGraphError::NoRoute` if the destination is unreachable.
    pub fn shortest_path(&self, from: NodeId, to: NodeId) -> RoadGraphResult<Path> {
        use std::cmp::Reverse;
        use std::collections::BinaryHeap;

        if from.index() >= self.node_count() {
            return Err(RoadGraphError::NodeNotFound(from));
        }
        if to.index() >= self.node_count() {
            return Err(RoadGraphError::NodeNotFound(to));
        }

        if from == to {
            return Ok(Path { nodes: vec![from], edges: vec![], total_length: Distance::ZERO });
        }

        let n = self.node_count();
        let mut dist = vec![f64::INFINITY; n];
        let mut prev_edge = vec![EdgeId::INVALID; n];

        dist[from.index()] = 0.0;

        // Min-heap over (cost-bits, node); NodeId breaks ties deterministically.
        let mut heap: BinaryHeap<Reverse<(OrderedF64, NodeId)>> = BinaryHeap::new();
        heap.push(Reverse((OrderedF64(0.0), from)));

        while let Some(Reverse((OrderedF64(cost), node))) = heap.pop() {
            if node == to {
                return Ok(reconstruct(self, prev_edge, from, to, cost));
            }
            if cost > dist[node.index()] {
                continue;
            }
            for edge in self.out_edges(node) {
                let neighbor = self.edge_to[edge.index()];
                let new_cost = cost + self.edge_length[edge.index()].meters();
                if new_cost < dist[neighbor.index()] {
                    dist[neighbor.index()] = new_cost;
                    prev_edge[neighbor.index()] = edge;
                    heap.push(Reverse((OrderedF64(new_cost), neighbor)));
                }
            }
        }

        Err(RoadGraphError::NoRoute { from, to })
    }
}

/// Wraps `f64` with a total order for use as a `BinaryHeap` key. Dijkstra
/// costs here are always finite and non-negative, so `NaN` never occurs.
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

fn reconstruct(
    graph: &RoadGraph,
    prev_edge: Vec<EdgeId>,
    from: NodeId,
    to: NodeId,
    total_m: f64,
) -> Path {
    let mut edges = Vec::new();
    let mut nodes = vec![to];
    let mut cur = to;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        edges.push(e);
        cur = graph.edge_from[e.index()];
        nodes.push(cur);
    }
    debug_assert_eq!(cur, from);
    edges.reverse();
    nodes.reverse();
    Path { nodes, edges, total_length: Distance::from_meters(total_m) }
}

// ── RoadGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`RoadGraph`] incrementally, then call [`build`](Self::build).
pub struct RoadGraphBuilder {
    nodes: Vec<Coordinates>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from: NodeId,
    to: NodeId,
    length_m: f64,
    speed_kph: f64,
    lanes: u32,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_edges: Vec::new() }
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self { nodes: Vec::with_capacity(nodes), raw_edges: Vec::with_capacity(edges) }
    }

    /// Add a road node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: Coordinates) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add a **directed** edge. `lanes == 0` is treated as the missing-value
    /// default of 1, per the road-graph input contract.
    pub fn add_directed_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        length_m: f64,
        speed_kph: f64,
        lanes: u32,
    ) -> RoadGraphResult<()> {
        if !(length_m > 0.0) || !length_m.is_finite() {
            return Err(RoadGraphError::InvalidInput(format!(
                "edge {from}->{to} has non-positive or non-finite length {length_m}"
            )));
        }
        if !(speed_kph > 0.0) || !speed_kph.is_finite() {
            return Err(RoadGraphError::InvalidInput(format!(
                "edge {from}->{to} has non-positive or non-finite speed {speed_kph}"
            )));
        }
        let lanes = lanes.max(1);
        self.raw_edges.push(RawEdge { from, to, length_m, speed_kph, lanes });
        Ok(())
    }

    /// Convenience: add edges in both directions for an undirected road
    /// segment.
    pub fn add_road(
        &mut self,
        a: NodeId,
        b: NodeId,
        length_m: f64,
        speed_kph: f64,
        lanes: u32,
    ) -> RoadGraphResult<()> {
        self.add_directed_edge(a, b, length_m, speed_kph, lanes)?;
        self.add_directed_edge(b, a, length_m, speed_kph, lanes)
    }

    pub fn node_pos(&self, id: NodeId) -> Coordinates {
        self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`RoadGraph`].
    pub fn build(self) -> RoadGraphResult<RoadGraph> {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from: Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to: Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_length: Vec<Distance> = raw.iter().map(|e| Distance::from_meters(e.length_m)).collect();
        let edge_speed: Vec<Speed> = raw.iter().map(|e| Speed::from_kph(e.speed_kph)).collect();
        let edge_lanes: Vec<u32> = raw.iter().map(|e| e.lanes).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &pos)| NodeEntry { point: [pos.lat, pos.lon], id: NodeId(i as u32) })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        Ok(RoadGraph {
            node_pos: self.nodes,
            node_out_start,
            edge_from,
            edge_to,
            edge_length,
            edge_speed,
            edge_lanes,
            spatial_idx,
        })
    }
}

impl Default for RoadGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
