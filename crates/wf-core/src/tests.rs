//! Unit tests for wf-core primitives.

#[cfg(test)]
mod ids {
    use crate::CityId;

    #[test]
    fn index_roundtrip() {
        let id = CityId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CityId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(CityId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(CityId(7).to_string(), "CityId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(52.52, 13.405);
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.19 km with R = 6371 km
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn symmetric() {
        let berlin  = GeoPoint::new(52.520, 13.405);
        let hamburg = GeoPoint::new(53.551, 9.994);
        let there = berlin.distance_km(hamburg);
        let back  = hamburg.distance_km(berlin);
        assert!((there - back).abs() < 1e-9);
        // Berlin–Hamburg is ~255 km as the crow flies.
        assert!((there - 255.0).abs() < 5.0, "got {there}");
    }

    #[test]
    fn validity_range() {
        assert!(GeoPoint::new(90.0, 180.0).is_valid());
        assert!(!GeoPoint::new(90.5, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -181.0).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::EngineConfig;

    #[test]
    fn defaults_match_bundled_demo() {
        let c = EngineConfig::default();
        assert_eq!(c.step_delay(), Duration::from_millis(500));
        assert_eq!(c.max_iterative_depth, 5);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn headless_has_no_delay() {
        assert_eq!(EngineConfig::headless().step_delay(), Duration::ZERO);
    }

    #[test]
    fn zero_bounds_rejected() {
        let c = EngineConfig { max_iterative_depth: 0, ..EngineConfig::headless() };
        assert!(c.validate().is_err());
        let c = EngineConfig { default_depth_limit: 0, ..EngineConfig::headless() };
        assert!(c.validate().is_err());
    }
}
