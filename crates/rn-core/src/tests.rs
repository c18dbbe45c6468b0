//! Unit tests for rn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CoreError, SegmentIndex, SegmentId, WaypointId, WaypointIndex};

    #[test]
    fn index_roundtrip() {
        let idx = WaypointIndex(42);
        assert_eq!(idx.index(), 42);
        assert_eq!(WaypointIndex::try_from(42usize).unwrap(), idx);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(WaypointIndex::INVALID.0, u32::MAX);
        assert_eq!(SegmentIndex::INVALID.0, u32::MAX);
        assert!(!WaypointIndex::default().is_valid());
        assert!(WaypointIndex(0).is_valid());
    }

    #[test]
    fn index_display() {
        assert_eq!(WaypointIndex(7).to_string(), "WaypointIndex(7)");
    }

    #[test]
    fn unique_id_parse_and_display() {
        let text = "6ba7b811-9dad-11d1-80b4-00c04fd430c8";
        let id: WaypointId = text.parse().unwrap();
        assert_eq!(id.to_string(), text);
    }

    #[test]
    fn unique_id_parse_rejects_garbage() {
        let err = "not-a-uuid".parse::<SegmentId>().unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
        assert!(err.to_string().contains("SegmentId"));
    }

    #[test]
    fn unique_id_compares_as_bytes() {
        let mut bytes = [0u8; 16];
        bytes[15] = 1;
        let a = WaypointId::from_bytes(bytes);
        let b = WaypointId::from_bytes(bytes);
        assert_eq!(a, b);
        assert_eq!(a.as_bytes(), &bytes);
        assert_ne!(a, WaypointId::NIL);
    }

    #[test]
    fn url_ids_are_stable_and_distinct() {
        let a = WaypointId::from_url("http://openstreetmap.org/node/1");
        let b = WaypointId::from_url("http://openstreetmap.org/node/2");
        assert_eq!(a, WaypointId::from_url("http://openstreetmap.org/node/1"));
        assert_ne!(a, b);
    }

    #[test]
    fn random_ids_differ() {
        assert_ne!(WaypointId::random(), WaypointId::random());
    }
}

#[cfg(test)]
mod geo {
    use crate::geo::METERS_PER_DEG_LAT;
    use crate::{GeoPoint, Location, Position};

    #[test]
    fn zero_distance() {
        let p = Position::new(512.0, -88.0);
        assert_eq!(p.planar_distance(p), 0.0);
    }

    #[test]
    fn three_four_five() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.planar_distance(b), 5.0);
        assert_eq!(b.planar_distance(a), 5.0);
    }

    #[test]
    fn elevation_ignored() {
        let a = Position::with_elevation(0.0, 0.0, 0.0);
        let b = Position::with_elevation(3.0, 4.0, 1_000.0);
        assert_eq!(a.planar_distance(b), 5.0);
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(1.0, 2.0).to_string(), "(1.000, 2.000)");
        assert_eq!(
            Position::with_elevation(1.0, 2.0, 3.5).to_string(),
            "(1.000, 2.000, 3.500)"
        );
    }

    #[test]
    fn projection_is_metres_from_origin() {
        let origin = GeoPoint::new(0.0, 0.0);
        let p = GeoPoint::with_altitude(1.0, 1.0, 25.0).project(origin);
        assert!((p.x - METERS_PER_DEG_LAT).abs() < 1e-6);
        assert!((p.y - METERS_PER_DEG_LAT).abs() < 1e-6);
        assert_eq!(p.z, Some(25.0));
        assert_eq!(origin.project(origin), Position::new(0.0, 0.0));
    }

    #[test]
    fn longitude_shrinks_with_latitude() {
        let origin = GeoPoint::new(60.0, 10.0);
        let east = GeoPoint::new(60.0, 11.0).project(origin);
        let north = GeoPoint::new(61.0, 10.0).project(origin);
        assert!((east.x / north.y - 0.5).abs() < 1e-9);
        assert!(east.y.abs() < 1e-9);
    }

    #[test]
    fn centroid_of_points() {
        assert_eq!(GeoPoint::centroid(Vec::new()), None);
        let c = GeoPoint::centroid([GeoPoint::new(10.0, 20.0), GeoPoint::new(12.0, 22.0)]).unwrap();
        assert_eq!((c.lat, c.lon), (11.0, 21.0));
    }

    #[test]
    fn location_elevation() {
        assert_eq!(Location::from(Position::with_elevation(0.0, 0.0, 3.0)).elevation(), Some(3.0));
        assert_eq!(Location::from(GeoPoint::new(1.0, 2.0)).elevation(), None);
        assert_eq!(Location::from(GeoPoint::new(1.0, 2.0)).as_geo(), Some(GeoPoint::new(1.0, 2.0)));
        assert_eq!(Location::from(Position::new(1.0, 2.0)).as_geo(), None);
    }
}
