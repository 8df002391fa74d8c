//! One-to-one spatial join: sampled point ← segment attributes.
//!
//! Each sampled point takes the attributes of exactly one segment in its
//! partition: the one at minimum point-to-polyline distance.  Points are
//! generated *on* the dissolved route geometry, so the winning distance is
//! normally zero; the minimum-distance rule covers points that land on a
//! shared vertex of two segments.  Ties resolve to the lowest `SegmentId` —
//! a documented deterministic policy, not index order.

use icr_core::PointId;
use icr_features::RoadSegment;
use icr_geom::SampledPoint;

use crate::error::{AssignError, AssignResult};
use crate::point::RoadPoint;

/// Attribute every sampled point from its nearest segment.
///
/// Every sample produces a point (`crash_count = 0`) regardless of how far
/// the nearest segment is; a missing segment AADT stays missing on the
/// point.
///
/// # Errors
/// [`AssignError::EmptyPartition`] if `segments` is empty.
pub fn join_segment_attrs(
    samples: &[SampledPoint],
    segments: &[&RoadSegment],
) -> AssignResult<Vec<RoadPoint>> {
    if segments.is_empty() {
        return Err(AssignError::EmptyPartition("road segments"));
    }

    Ok(samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let mut best = segments[0];
            let mut best_dist = best.line.distance_to(sample.pos);
            for seg in &segments[1..] {
                let dist = seg.line.distance_to(sample.pos);
                // Strict less-than keeps the earlier (lower-id) segment on
                // exact ties; `min` on id below covers unsorted input.
                if dist < best_dist || (dist == best_dist && seg.id < best.id) {
                    best = seg;
                    best_dist = dist;
                }
            }

            RoadPoint {
                id: PointId(i as u32),
                pos: sample.pos,
                offset: sample.offset,
                segment: best.id,
                aadt: best.aadt,
                crash_count: 0,
            }
        })
        .collect())
}
