//! Threshold filter and per-point crash counts.

use icr_assign::{Assignment, RoadPoint};
use icr_core::{LinearUnit, PointId};
use rustc_hash::FxHashMap;

/// Count qualifying crashes into each point's `crash_count`.
///
/// An assignment qualifies when its distance, converted from native units
/// into `unit`, is strictly less than `near_dist` (a crash at exactly the
/// threshold is excluded).  Qualifying assignments are grouped by nearest
/// point and the counts written in; points with no qualifying crash keep 0.
///
/// Returns the number of qualifying assignments, which by construction
/// equals the sum of `crash_count` over `points`.
pub fn apply_crash_counts(
    points: &mut [RoadPoint],
    assignments: &[Assignment],
    near_dist: f64,
    unit: LinearUnit,
) -> usize {
    let mut counts: FxHashMap<PointId, u32> = FxHashMap::default();
    let mut qualifying = 0usize;

    for a in assignments {
        if unit.from_native(a.distance) < near_dist {
            *counts.entry(a.point).or_insert(0) += 1;
            qualifying += 1;
        }
    }

    for p in points.iter_mut() {
        p.crash_count = counts.get(&p.id).copied().unwrap_or(0);
    }

    qualifying
}
