//! Synthetic road network definition: a regular grid spanning a handful of
//! H3 cells, standing in for an externally-ingested OSM/PBF network.

use traffic_core::{meters_to_degrees, Coordinates};
use traffic_roadgraph::{RoadGraph, RoadGraphBuilder};

/// Build a `rows` x `cols` grid of nodes spaced `spacing_m` metres apart,
/// anchored at `(origin_lat, origin_lon)`, with bidirectional roads between
/// every orthogonal neighbour.
pub fn build_grid_network(
    origin_lat: f64,
    origin_lon: f64,
    rows: usize,
    cols: usize,
    spacing_m: f64,
    speed_kph: f64,
    lanes: u32,
) -> RoadGraph {
    let step_deg = meters_to_degrees(spacing_m);
    let mut b = RoadGraphBuilder::with_capacity(rows * cols, rows * cols * 4);

    let mut ids = vec![vec![None; cols]; rows];
    for (r, row) in ids.iter_mut().enumerate() {
        for (c, slot) in row.iter_mut().enumerate() {
            let pos = Coordinates::new(origin_lat + r as f64 * step_deg, origin_lon + c as f64 * step_deg);
            *slot = Some(b.add_node(pos));
        }
    }

    for r in 0..rows {
        for c in 0..cols {
            let here = ids[r][c].unwrap();
            if c + 1 < cols {
                b.add_road(here, ids[r][c + 1].unwrap(), spacing_m, speed_kph, lanes).unwrap();
            }
            if r + 1 < rows {
                b.add_road(here, ids[r + 1][c].unwrap(), spacing_m, speed_kph, lanes).unwrap();
            }
        }
    }

    b.build().expect("grid network is well-formed by construction")
}
