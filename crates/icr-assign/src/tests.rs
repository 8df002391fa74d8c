//! Unit tests for icr-assign.

#[cfg(test)]
mod helpers {
    use icr_core::{CrashId, PlanePoint, PointId, SegmentId};
    use icr_features::{CrashEvent, RoadSegment};
    use icr_geom::Polyline;

    use crate::RoadPoint;

    pub fn road_point(id: u32, x: f64, y: f64) -> RoadPoint {
        RoadPoint {
            id: PointId(id),
            pos: PlanePoint::new(x, y),
            offset: id as f64 * 100.0,
            segment: SegmentId(0),
            aadt: Some(1000.0),
            crash_count: 0,
        }
    }

    /// Points on a 100-unit-spaced straight line: ids 0..n left to right.
    pub fn line_points(n: u32) -> Vec<RoadPoint> {
        (0..n).map(|i| road_point(i, i as f64 * 100.0, 0.0)).collect()
    }

    pub fn crash(id: u32, x: f64, y: f64) -> CrashEvent {
        CrashEvent {
            id: CrashId(id),
            state_code: 1,
            way_name: "I-65".into(),
            pos: PlanePoint::new(x, y),
        }
    }

    pub fn segment(id: u32, aadt: Option<f64>, coords: &[(f64, f64)]) -> RoadSegment {
        RoadSegment {
            id: SegmentId(id),
            state_code: 1,
            route_number: 65,
            aadt,
            line: Polyline::new(coords.iter().map(|&(x, y)| PlanePoint::new(x, y)).collect()),
        }
    }
}

// ── PointIndex ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod index {
    use icr_core::{PlanePoint, PointId};

    use crate::{AssignError, PointIndex};

    #[test]
    fn empty_partition_rejected() {
        assert!(matches!(
            PointIndex::build(&[]),
            Err(AssignError::EmptyPartition(_))
        ));
    }

    #[test]
    fn nearest_basic() {
        let points = super::helpers::line_points(5);
        let index = PointIndex::build(&points).unwrap();
        // 130 is closer to the point at 100 than the one at 200.
        let (id, dist) = index.nearest(PlanePoint::new(130.0, 0.0));
        assert_eq!(id, PointId(1));
        assert_eq!(dist, 30.0);
    }

    #[test]
    fn tie_breaks_to_lowest_id() {
        // Exactly between points 2 (200, 0) and 3 (300, 0).
        let points = super::helpers::line_points(5);
        let index = PointIndex::build(&points).unwrap();
        let (id, dist) = index.nearest(PlanePoint::new(250.0, 0.0));
        assert_eq!(id, PointId(2));
        assert_eq!(dist, 50.0);
    }

    #[test]
    fn matches_brute_force() {
        // 10×10 grid of points vs. a spread of query positions; the R-tree
        // answer must equal the linear-scan answer, tie-break included.
        let points: Vec<_> = (0..100)
            .map(|i| super::helpers::road_point(i, (i % 10) as f64 * 50.0, (i / 10) as f64 * 50.0))
            .collect();
        let index = PointIndex::build(&points).unwrap();

        let queries = [
            (0.0, 0.0),
            (24.9, 25.1),
            (25.0, 25.0), // 4-way tie
            (451.0, 12.0),
            (-100.0, -100.0),
            (475.0, 475.0),
            (123.4, 321.9),
        ];
        for (x, y) in queries {
            let q = PlanePoint::new(x, y);
            let brute = points
                .iter()
                .map(|p| (p.pos.distance_sq(q), p.id))
                .min_by(|a, b| a.partial_cmp(b).unwrap())
                .unwrap();
            let (id, dist) = index.nearest(q);
            assert_eq!(id, brute.1, "query ({x}, {y})");
            assert!((dist * dist - brute.0).abs() < 1e-9);
        }
    }

    #[test]
    fn deterministic_across_rebuilds() {
        let points = super::helpers::line_points(50);
        let a = PointIndex::build(&points).unwrap();
        let b = PointIndex::build(&points).unwrap();
        for i in 0..200 {
            let q = icr_core::PlanePoint::new(i as f64 * 13.7, (i % 7) as f64 * 5.0);
            assert_eq!(a.nearest(q), b.nearest(q));
        }
    }
}

// ── Attribute join ────────────────────────────────────────────────────────────

#[cfg(test)]
mod join {
    use icr_core::{PointId, SegmentId};
    use icr_geom::{SampledPoint, sample_points};

    use crate::{AssignError, join_segment_attrs};

    #[test]
    fn copies_nearest_segment_attrs() {
        let seg_a = super::helpers::segment(0, Some(41000.0), &[(0.0, 0.0), (100.0, 0.0)]);
        let seg_b = super::helpers::segment(1, Some(9000.0), &[(100.0, 0.0), (200.0, 0.0)]);
        let segments = vec![&seg_a, &seg_b];

        let merged = icr_geom::dissolve(vec![seg_a.line.clone(), seg_b.line.clone()]);
        let samples = sample_points(&merged[0], 50.0).unwrap();
        let points = join_segment_attrs(&samples, &segments).unwrap();

        assert_eq!(points.len(), 5); // offsets 0, 50, 100, 150, 200
        assert_eq!(points[0].aadt, Some(41000.0));
        assert_eq!(points[0].segment, SegmentId(0));
        assert_eq!(points[4].aadt, Some(9000.0));
        assert_eq!(points[4].segment, SegmentId(1));
    }

    #[test]
    fn shared_vertex_tie_takes_lower_segment_id() {
        let seg_a = super::helpers::segment(0, Some(41000.0), &[(0.0, 0.0), (100.0, 0.0)]);
        let seg_b = super::helpers::segment(1, Some(9000.0), &[(100.0, 0.0), (200.0, 0.0)]);
        let segments = vec![&seg_a, &seg_b];

        // The sample at exactly (100, 0) touches both segments.
        let samples = [SampledPoint {
            pos: icr_core::PlanePoint::new(100.0, 0.0),
            offset: 100.0,
        }];
        let points = join_segment_attrs(&samples, &segments).unwrap();
        assert_eq!(points[0].segment, SegmentId(0));
        assert_eq!(points[0].aadt, Some(41000.0));
    }

    #[test]
    fn crash_count_initialized_to_zero() {
        let seg = super::helpers::segment(0, None, &[(0.0, 0.0), (100.0, 0.0)]);
        let samples = sample_points(&seg.line, 50.0).unwrap();
        let points = join_segment_attrs(&samples, &[&seg]).unwrap();
        assert!(points.iter().all(|p| p.crash_count == 0));
        // Missing segment AADT stays missing.
        assert!(points.iter().all(|p| p.aadt.is_none()));
    }

    #[test]
    fn point_ids_are_sequential() {
        let seg = super::helpers::segment(0, Some(1.0), &[(0.0, 0.0), (300.0, 0.0)]);
        let samples = sample_points(&seg.line, 100.0).unwrap();
        let points = join_segment_attrs(&samples, &[&seg]).unwrap();
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.id, PointId(i as u32));
        }
    }

    #[test]
    fn empty_segments_rejected() {
        let samples = [SampledPoint {
            pos: icr_core::PlanePoint::new(0.0, 0.0),
            offset: 0.0,
        }];
        assert!(matches!(
            join_segment_attrs(&samples, &[]),
            Err(AssignError::EmptyPartition(_))
        ));
    }
}

// ── Nearest assignment ────────────────────────────────────────────────────────

#[cfg(test)]
mod near {
    use icr_core::{CrashId, PointId};

    use crate::{PointIndex, assign_nearest};

    #[test]
    fn each_crash_gets_nearest_point() {
        let points = super::helpers::line_points(5);
        let index = PointIndex::build(&points).unwrap();

        let c0 = super::helpers::crash(0, 10.0, 5.0);
        let c1 = super::helpers::crash(1, 390.0, -20.0);
        let assignments = assign_nearest(&[&c0, &c1], &index);

        assert_eq!(assignments.len(), 2);
        assert_eq!(assignments[0].crash, CrashId(0));
        assert_eq!(assignments[0].point, PointId(0));
        assert!((assignments[0].distance - (125.0f64).sqrt()).abs() < 1e-9);
        assert_eq!(assignments[1].point, PointId(4));
    }

    #[test]
    fn many_crashes_one_point() {
        let points = super::helpers::line_points(3);
        let index = PointIndex::build(&points).unwrap();
        let crashes: Vec<_> = (0..4)
            .map(|i| super::helpers::crash(i, 100.0 + i as f64, 1.0))
            .collect();
        let refs: Vec<_> = crashes.iter().collect();
        let assignments = assign_nearest(&refs, &index);
        assert!(assignments.iter().all(|a| a.point == PointId(1)));
    }

    #[test]
    fn rerun_is_identical() {
        let points = super::helpers::line_points(20);
        let index = PointIndex::build(&points).unwrap();
        let crashes: Vec<_> = (0..30)
            .map(|i| super::helpers::crash(i, i as f64 * 61.7, (i % 5) as f64 * 7.0))
            .collect();
        let refs: Vec<_> = crashes.iter().collect();
        assert_eq!(assign_nearest(&refs, &index), assign_nearest(&refs, &index));
    }
}
