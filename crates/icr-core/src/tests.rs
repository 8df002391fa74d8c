//! Unit tests for icr-core primitives.

#[cfg(test)]
mod ids {
    use crate::{PointId, SegmentId};

    #[test]
    fn index_casts_to_usize() {
        assert_eq!(PointId(42).index(), 42);
    }

    #[test]
    fn ordering() {
        assert!(PointId(0) < PointId(1));
        assert!(SegmentId(100) > SegmentId(99));
    }

    #[test]
    fn display() {
        assert_eq!(PointId(7).to_string(), "PointId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::PlanePoint;

    #[test]
    fn planar_distance() {
        let a = PlanePoint::new(0.0, 0.0);
        let b = PlanePoint::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_sq(b), 25.0);
    }

    #[test]
    fn lerp_midpoint() {
        let a = PlanePoint::new(0.0, 0.0);
        let b = PlanePoint::new(10.0, -10.0);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid, PlanePoint::new(5.0, -5.0));
    }

    #[test]
    fn lerp_endpoints() {
        let a = PlanePoint::new(1.0, 2.0);
        let b = PlanePoint::new(3.0, 4.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }
}

#[cfg(test)]
mod units {
    use crate::{CoreError, LinearUnit};

    #[test]
    fn factors_match_reference() {
        assert_eq!(LinearUnit::Meters.from_native_factor(), 1.0);
        assert_eq!(LinearUnit::Kilometers.from_native_factor(), 0.001);
        assert_eq!(LinearUnit::Miles.from_native_factor(), 0.000_621_37);
        assert_eq!(LinearUnit::Feet.from_native_factor(), 3.2808);
    }

    #[test]
    fn native_is_identity() {
        assert_eq!(LinearUnit::NATIVE, LinearUnit::Meters);
        assert_eq!(LinearUnit::Meters.from_native(123.456), 123.456);
    }

    #[test]
    fn roundtrip_within_tolerance() {
        // spec property: from_native then to_native reproduces the value.
        for unit in [
            LinearUnit::Kilometers,
            LinearUnit::Miles,
            LinearUnit::Feet,
        ] {
            let native = 1_234.567_8;
            let back = unit.to_native(unit.from_native(native));
            assert!((back - native).abs() < 1e-9, "{unit}: {back} vs {native}");
        }
    }

    #[test]
    fn parse_accepts_plural_and_case() {
        assert_eq!("Miles".parse::<LinearUnit>().unwrap(), LinearUnit::Miles);
        assert_eq!("mile".parse::<LinearUnit>().unwrap(), LinearUnit::Miles);
        assert_eq!("KILOMETERS".parse::<LinearUnit>().unwrap(), LinearUnit::Kilometers);
        assert_eq!("ft".parse::<LinearUnit>().unwrap(), LinearUnit::Feet);
        assert_eq!(" meters ".parse::<LinearUnit>().unwrap(), LinearUnit::Meters);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "furlongs".parse::<LinearUnit>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownUnit(_)));
    }
}

#[cfg(test)]
mod key {
    use crate::PartitionKey;

    #[test]
    fn route_tag() {
        assert_eq!(PartitionKey::new(1, 65).route_tag(), "I-65");
    }

    #[test]
    fn ordering_is_state_then_route() {
        assert!(PartitionKey::new(1, 99) < PartitionKey::new(2, 10));
        assert!(PartitionKey::new(1, 10) < PartitionKey::new(1, 65));
    }

    #[test]
    fn display() {
        assert_eq!(PartitionKey::new(8, 70).to_string(), "state 8 / I-70");
    }
}

#[cfg(test)]
mod config {
    use crate::config::DEFAULT_SPACING_NATIVE;
    use crate::{LinearUnit, PipelineConfig};

    #[test]
    fn default_spacing_is_point_one_mile() {
        // 0.1 mile expressed in native meters via the reference factor.
        assert!((DEFAULT_SPACING_NATIVE * 0.000_621_37 - 0.1).abs() < 1e-12);
    }

    #[test]
    fn builder_setters() {
        let cfg = PipelineConfig::new("/tmp/out", 0.05)
            .unit(LinearUnit::Miles)
            .spacing_native(100.0);
        assert_eq!(cfg.unit, LinearUnit::Miles);
        assert_eq!(cfg.spacing_native, 100.0);
        assert_eq!(cfg.near_dist, 0.05);
    }
}
