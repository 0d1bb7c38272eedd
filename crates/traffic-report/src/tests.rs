#[cfg(test)]
mod helpers {
    use h3o::{CellIndex, LatLng, Resolution};
    use traffic_cluster::Cluster;
    use traffic_core::{ClusterId, Coordinates};
    use traffic_roadgraph::RoadGraphBuilder;

    pub const RES: Resolution = Resolution::Nine;

    pub fn adjacent_cluster_pair() -> (Cluster, Cluster) {
        let base = LatLng::new(54.460, 17.020).unwrap().to_cell(RES);
        let ring: Vec<CellIndex> = base.grid_disk(1);
        let neighbour = *ring.iter().find(|&&c| c != base).expect("base has a neighbour");

        let a_id = ClusterId::from(base);
        let b_id = ClusterId::from(neighbour);
        let a = Cluster::new(a_id, a_id.centre(), vec![a_id.centre()]);
        let b = Cluster::new(b_id, b_id.centre(), vec![b_id.centre()]);
        (a, b)
    }

    pub fn two_hop_road_graph(a: Coordinates, b: Coordinates) -> traffic_roadgraph::RoadGraph {
        let mid = Coordinates::mean(&[a, b]).unwrap();
        let mut rb = RoadGraphBuilder::new();
        let na = rb.add_node(a);
        let nm = rb.add_node(mid);
        let nb = rb.add_node(b);
        rb.add_road(na, nm, 500.0, 50.0, 2).unwrap();
        rb.add_road(nm, nb, 500.0, 50.0, 2).unwrap();
        rb.build().unwrap()
    }
}

#[cfg(test)]
mod summary {
    use h3o::Resolution;
    use traffic_assign::{IncrementalBatchedAssigner, Travel, TravelRouteAssigner};
    use traffic_core::{Time, TravelId};
    use crate::summarize;

    use super::helpers::*;

    #[test]
    fn empty_routes_summarize_to_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.route_count, 0);
        assert_eq!(summary.mean_travel_time, Time::ZERO);
    }

    #[test]
    fn mean_matches_manual_average() {
        let (a, b) = adjacent_cluster_pair();
        let road_graph = two_hop_road_graph(a.centre, b.centre);

        let travels: Vec<Travel> = (0..3).map(|i| Travel::new(TravelId(i), a.cell_id, b.cell_id)).collect();
        let assigner = IncrementalBatchedAssigner::new(Resolution::Nine, 3, 1).unwrap();
        let result = assigner.assign_routes(&travels, &[a, b], &road_graph).unwrap();

        let summary = summarize(&result.routes);
        assert_eq!(summary.route_count, 3);

        let manual_total: f64 = result.routes.iter().map(|r| r.estimated_travel_time.seconds()).sum();
        assert!((summary.mean_travel_time.seconds() - manual_total / 3.0).abs() < 1e-9);
    }
}

#[cfg(test)]
mod edges {
    use h3o::Resolution;
    use traffic_assign::{IncrementalBatchedAssigner, Travel, TravelRouteAssigner};
    use traffic_core::TravelId;
    use crate::edge_view;

    use super::helpers::*;

    #[test]
    fn edge_view_reflects_final_volume_and_path() {
        let (a, b) = adjacent_cluster_pair();
        let road_graph = two_hop_road_graph(a.centre, b.centre);

        let travels: Vec<Travel> =
            (0..5).map(|i| Travel::new(TravelId(i), a.cell_id, b.cell_id)).collect();
        let assigner = IncrementalBatchedAssigner::new(Resolution::Nine, 5, 1).unwrap();
        let result = assigner.assign_routes(&travels, &[a.clone(), b.clone()], &road_graph).unwrap();

        let views = edge_view(&result.graph);
        assert_eq!(views.len(), 2); // a->b and b->a

        let ab = views.iter().find(|v| v.start == a.cell_id && v.end == b.cell_id).unwrap();
        assert_eq!(ab.volume, 5);
        assert!(ab.travel_time.seconds() >= ab.free_flow_travel_time.seconds());
        assert_eq!(ab.path.len(), 3); // a-node, midpoint, b-node

        let ba = views.iter().find(|v| v.start == b.cell_id && v.end == a.cell_id).unwrap();
        assert_eq!(ba.volume, 0);
    }
}
