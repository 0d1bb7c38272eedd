//! `basic` — end-to-end demo of the commuter traffic assignment core.
//!
//! Wires every `traffic-*` crate together against a small hand-built grid
//! road network: sample a synthetic population from configured epicentres,
//! cluster it into hexagonal cells, build the inter-cluster path atlas and
//! graph, generate travel demand, run the incremental batched assigner, and
//! print a summary. Pass `--csv <dir>` to also write the final edge view to
//! `<dir>/edges.csv`.
//!
//! Run with:
//!   cargo run -p basic --release
//!   cargo run -p basic --release -- --csv ./output

mod network;
mod population_sample;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use h3o::Resolution;

use traffic_assign::{IncrementalBatchedAssigner, TravelRouteAssigner};
use traffic_cluster::{clusterize, consolidate, ClusterCentreStrategy};
use traffic_core::{Coordinates, ScopedRng};
use traffic_demand::{generate_travels, PopulationConfig, TravelIdCounter};
use traffic_report::{edge_view, summarize};

const SEED: u64 = 42;
const RESOLUTION: Resolution = Resolution::Eight;

const POPULATION_CONFIG_JSON: &str = r#"
{
  "epicentres": [
    { "label": "downtown",    "latitude": 54.3700, "longitude": 18.6300,
      "population_count": 800, "radius": 600.0, "distribution_kind": "NORMAL" },
    { "label": "suburb_east", "latitude": 54.3900, "longitude": 18.6700,
      "population_count": 400, "radius": 500.0, "distribution_kind": "NORMAL" },
    { "label": "suburb_west", "latitude": 54.3600, "longitude": 18.5900,
      "population_count": 300, "radius": 450.0, "distribution_kind": "NORMAL" }
  ],
  "travel_coefficient": 0.2
}
"#;

fn main() -> Result<()> {
    println!("=== traffic assignment core: basic demo ===");
    println!("seed: {SEED}  |  h3 resolution: {RESOLUTION:?}");
    println!();

    let csv_dir = parse_csv_arg();

    // 1. Road network (stands in for the externally-ingested OSM/PBF graph).
    let t_network = Instant::now();
    let road_graph = network::build_grid_network(54.350, 18.560, 40, 40, 200.0, 45.0, 2);
    println!(
        "Road network: {} nodes, {} edges ({:.2}s)",
        road_graph.node_count(),
        road_graph.edge_count(),
        t_network.elapsed().as_secs_f64()
    );

    // 2. Population configuration + sampling.
    let t_population = Instant::now();
    let config = PopulationConfig::from_json(POPULATION_CONFIG_JSON)?;
    let mut points: Vec<Coordinates> = Vec::new();
    for (i, epicentre) in config.epicentres.iter().enumerate() {
        let mut rng = ScopedRng::new(SEED, i as u64);
        points.extend(population_sample::generate_data_points(epicentre, rng.inner()));
    }
    println!(
        "Population: {} points across {} epicentres ({:.2}s)",
        points.len(),
        config.epicentres.len(),
        t_population.elapsed().as_secs_f64()
    );

    // 3. Hex clustering + consolidation.
    let t_cluster = Instant::now();
    let raw_clusters = clusterize(&points, RESOLUTION, ClusterCentreStrategy::HexagonCenter)?;
    let (clusters, consolidate_diag) = consolidate(&raw_clusters, &road_graph, RESOLUTION)?;
    println!(
        "Clustering: {} raw clusters -> {} consolidated ({} discarded) ({:.2}s)",
        raw_clusters.len(),
        clusters.len(),
        consolidate_diag.discarded,
        t_cluster.elapsed().as_secs_f64()
    );

    // 4. Travel demand generation.
    let t_demand = Instant::now();
    let mut counter = TravelIdCounter::new();
    let travels = generate_travels(&clusters, config.travel_coefficient, SEED, &mut counter)?;
    println!("Demand: {} travels ({:.2}s)", travels.len(), t_demand.elapsed().as_secs_f64());

    // 5. Incremental batched route assignment.
    let t_assign = Instant::now();
    let assigner = IncrementalBatchedAssigner::new(RESOLUTION, 200, 3)?;
    let assignment = assigner.assign_routes(&travels, &clusters, &road_graph)?;
    println!(
        "Assignment: {} routed, {} dropped, atlas degenerate={} unreachable={} ({:.2}s)",
        assignment.diagnostics.routed_travels,
        assignment.diagnostics.dropped_travels,
        assignment.diagnostics.atlas.degenerate_paths,
        assignment.diagnostics.atlas.unreachable_pairs,
        t_assign.elapsed().as_secs_f64()
    );

    // 6. Summary.
    let summary = summarize(&assignment.routes);
    println!();
    println!("Mean travel time: {}", summary.mean_travel_time);
    println!("Routes: {}", summary.route_count);

    if let Some(dir) = csv_dir {
        write_edges_csv(&dir, &assignment.graph)?;
        println!("Edge view written to {}/edges.csv", dir.display());
    }

    Ok(())
}

fn parse_csv_arg() -> Option<PathBuf> {
    let args: Vec<String> = std::env::args().collect();
    let idx = args.iter().position(|a| a == "--csv")?;
    args.get(idx + 1).map(PathBuf::from)
}

fn write_edges_csv(dir: &PathBuf, graph: &traffic_graph::ClusterGraph) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let mut writer = csv::Writer::from_path(dir.join("edges.csv"))?;
    writer.write_record([
        "start",
        "end",
        "travel_time_s",
        "free_flow_travel_time_s",
        "capacity",
        "volume",
    ])?;
    for edge in edge_view(graph) {
        writer.write_record(&[
            edge.start.to_string(),
            edge.end.to_string(),
            edge.travel_time.seconds().to_string(),
            edge.free_flow_travel_time.seconds().to_string(),
            edge.capacity.to_string(),
            edge.volume.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
