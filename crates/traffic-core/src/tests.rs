//! Unit tests for traffic-core.

use crate::{degrees_to_meters, meters_to_degrees, Coordinates, Distance, Speed, Time};

#[cfg(test)]
mod units {
    use super::*;

    #[test]
    fn distance_round_trip_kilometers() {
        let d = Distance::from_meters(12_345.0);
        assert!((d.kilometers() * 1000.0 - 12_345.0).abs() < 1e-9);
    }

    #[test]
    fn degrees_round_trip() {
        for x in [0.0, 1.0, 500.0, 123_456.789] {
            let back = degrees_to_meters(meters_to_degrees(x));
            assert!((back - x).abs() < 1e-6, "{x} round-tripped to {back}");
        }
    }

    #[test]
    fn speed_from_kph_matches_distance_over_time() {
        let speed = Speed::from_kph(90.0);
        let one_hour = Time::from_hours(1.0);
        let travelled = speed * one_hour;
        assert!((travelled.kilometers() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn distance_div_time_yields_speed() {
        let d = Distance::from_meters(1_000.0);
        let t = Time::from_seconds(100.0);
        let speed = d / t;
        assert!((speed.meters_per_sec() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn speed_min_picks_slower() {
        let a = Speed::from_kph(50.0);
        let b = Speed::from_kph(30.0);
        assert_eq!(a.min(b), b);
        assert_eq!(b.min(a), b);
    }

    #[test]
    fn time_sum_and_distance_sum() {
        let total = Time::sum([Time::from_seconds(10.0), Time::from_seconds(20.0)]);
        assert!((total.seconds() - 30.0).abs() < 1e-9);
        let len = Distance::sum([Distance::from_meters(1.0), Distance::from_meters(2.0)]);
        assert!((len.meters() - 3.0).abs() < 1e-9);
    }
}

#[cfg(test)]
mod geo {
    use super::*;

    #[test]
    fn mean_of_points() {
        let pts = [
            Coordinates::new(0.0, 0.0),
            Coordinates::new(2.0, 4.0),
        ];
        let mean = Coordinates::mean(&pts).unwrap();
        assert!((mean.lat - 1.0).abs() < 1e-9);
        assert!((mean.lon - 2.0).abs() < 1e-9);
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert!(Coordinates::mean(&[]).is_none());
    }

    #[test]
    fn distance_zero_for_identical_points() {
        let p = Coordinates::new(54.46, 17.02);
        assert!(p.distance_m(p) < 1e-6);
    }

    #[test]
    fn distance_increases_with_separation() {
        let a = Coordinates::new(54.46, 17.02);
        let near = Coordinates::new(54.461, 17.02);
        let far = Coordinates::new(54.50, 17.02);
        assert!(a.distance_m(far) > a.distance_m(near));
    }
}

#[cfg(test)]
mod ids {
    use crate::{ClusterId, NodeId};
    use h3o::{LatLng, Resolution};

    #[test]
    fn node_id_invalid_sentinel() {
        assert_eq!(NodeId::default(), NodeId::INVALID);
        assert_ne!(NodeId(0), NodeId::INVALID);
    }

    #[test]
    fn cluster_id_display_is_hex_h3() {
        let cell = LatLng::new(54.46, 17.02).unwrap().to_cell(Resolution::Eight);
        let id = ClusterId::from(cell);
        let rendered = format!("{id}");
        assert_eq!(rendered, format!("{cell:x}"));
    }

    #[test]
    fn cluster_id_centre_round_trips_to_same_cell() {
        let cell = LatLng::new(54.46, 17.02).unwrap().to_cell(Resolution::Nine);
        let id = ClusterId::from(cell);
        let centre = id.centre();
        let recomputed = LatLng::new(centre.lat, centre.lon).unwrap().to_cell(Resolution::Nine);
        assert_eq!(recomputed, cell);
    }
}

#[cfg(test)]
mod travel {
    use crate::{ClusterId, Travel, TravelId};
    use h3o::{LatLng, Resolution};

    fn cluster_id(lat: f64, lon: f64) -> ClusterId {
        ClusterId::from(LatLng::new(lat, lon).unwrap().to_cell(Resolution::Eight))
    }

    #[test]
    fn is_trivial_only_when_clusters_match() {
        let a = cluster_id(54.40, 17.00);
        let b = cluster_id(54.50, 17.10);
        assert!(Travel::new(TravelId(0), a, a).is_trivial());
        assert!(!Travel::new(TravelId(0), a, b).is_trivial());
    }
}

#[cfg(test)]
mod rng {
    use crate::ScopedRng;

    #[test]
    fn same_seed_and_index_is_deterministic() {
        let mut a = ScopedRng::new(42, 7);
        let mut b = ScopedRng::new(42, 7);
        let xs: Vec<u32> = (0..10).map(|_| a.gen_range(0..1000)).collect();
        let ys: Vec<u32> = (0..10).map(|_| b.gen_range(0..1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn different_index_usually_diverges() {
        let mut a = ScopedRng::new(42, 1);
        let mut b = ScopedRng::new(42, 2);
        let xs: Vec<u32> = (0..10).map(|_| a.gen_range(0..u32::MAX)).collect();
        let ys: Vec<u32> = (0..10).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(xs, ys);
    }
}
