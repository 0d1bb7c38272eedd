//! Unit tests for traffic-graph.

#[cfg(test)]
mod helpers {
    use h3o::{CellIndex, LatLng, Resolution};
    use traffic_cluster::Cluster;
    use traffic_core::{ClusterId, Coordinates};

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

    pub fn midpoint(a: Coordinates, b: Coordinates) -> Coordinates {
        Coordinates::mean(&[a, b]).unwrap()
    }
}

#[cfg(test)]
mod link_state {
    use traffic_core::{ClusterId, Distance, Speed, TravelId};

    use crate::link::{LinkState, PathData};

    fn path_data(capacity_lanes: u32) -> PathData {
        let dummy = ClusterId::from(h3o::LatLng::new(0.0, 0.0).unwrap().to_cell(h3o::Resolution::Nine));
        PathData::new(
            dummy,
            dummy,
            Distance::from_meters(1_000.0),
            Speed::from_kph(50.0),
            capacity_lanes,
            true,
            vec![],
        )
    }

    #[test]
    fn travel_time_at_zero_volume_is_free_flow() {
        let link = LinkState::new(path_data(1));
        assert_eq!(link.travel_time(), link.path_data.free_flow_travel_time);
    }

    #[test]
    fn travel_time_is_strictly_increasing_in_volume() {
        let mut link = LinkState::new(path_data(1));
        let mut prev = link.travel_time();
        for i in 0..50 {
            link.assign(TravelId(i));
            let next = link.travel_time();
            assert!(next.seconds() >= prev.seconds());
            prev = next;
        }
    }

    #[test]
    fn travel_time_never_drops_below_free_flow() {
        let mut link = LinkState::new(path_data(1));
        for i in 0..100 {
            link.assign(TravelId(i));
        }
        assert!(link.travel_time().seconds() >= link.path_data.free_flow_travel_time.seconds());
    }

    #[test]
    fn at_capacity_slowdown_matches_bpr_formula() {
        let mut link = LinkState::new(path_data(1)); // capacity = 2200
        for i in 0..2_200 {
            link.assign(TravelId(i));
        }
        let t0 = link.path_data.free_flow_travel_time.seconds();
        let expected = t0 * (1.0 + 0.15);
        assert!((link.travel_time().seconds() - expected).abs() < 1e-6);
    }

    #[test]
    fn reassigning_same_travel_is_a_no_op() {
        let mut link = LinkState::new(path_data(1));
        link.assign(TravelId(7));
        let before = link.volume();
        link.assign(TravelId(7));
        assert_eq!(link.volume(), before);
        assert_eq!(link.volume(), 1);
    }

    #[test]
    fn unassign_removes_travel() {
        let mut link = LinkState::new(path_data(1));
        link.assign(TravelId(1));
        link.assign(TravelId(2));
        link.unassign(TravelId(1));
        assert_eq!(link.volume(), 1);
        assert!(!link.contains(TravelId(1)));
        assert!(link.contains(TravelId(2)));
    }
}

#[cfg(test)]
mod build_cluster_graph {
    use traffic_atlas::build_atlas;
    use traffic_roadgraph::RoadGraphBuilder;

    use crate::graph::build_cluster_graph;

    #[test]
    fn produces_symmetric_edges_with_correct_attributes() {
        let (a, b) = super::helpers::adjacent_cluster_pair();
        let mid = super::helpers::midpoint(a.centre, b.centre);

        let mut rb = RoadGraphBuilder::new();
        let na = rb.add_node(a.centre);
        let nm = rb.add_node(mid);
        let nb = rb.add_node(b.centre);
        rb.add_road(na, nm, 400.0, 50.0, 2).unwrap();
        rb.add_road(nm, nb, 600.0, 30.0, 1).unwrap();
        let road_graph = rb.build().unwrap();

        let clusters = vec![a.clone(), b.clone()];
        let (atlas, diag) = build_atlas(&clusters, &road_graph).unwrap();
        assert_eq!(diag.degenerate_paths, 0);

        let graph = build_cluster_graph(&clusters, &atlas, &road_graph, super::helpers::RES).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.link_count(), 2); // A->B and B->A

        let ia = graph.index_of(a.cell_id).unwrap();
        let link_id = graph.out_edges(ia).next().unwrap();
        let link = graph.link(link_id);

        assert_eq!(link.path_data.total_length.meters(), 1_000.0);
        assert_eq!(link.path_data.min_max_speed.kph(), 30.0);
        assert_eq!(link.path_data.min_lane_count, 1);
        assert_eq!(link.path_data.max_capacity, 2_200);
    }

    #[test]
    fn empty_atlas_yields_isolated_nodes() {
        let (a, b) = super::helpers::adjacent_cluster_pair();
        let mut rb = RoadGraphBuilder::new();
        rb.add_node(a.centre);
        rb.add_node(b.centre);
        let road_graph = rb.build().unwrap();

        let clusters = vec![a, b];
        let (atlas, _) = build_atlas(&clusters, &road_graph).unwrap();
        let graph = build_cluster_graph(&clusters, &atlas, &road_graph, super::helpers::RES).unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.link_count(), 0);
    }
}
