//! Nearest-point assignment for crash events.
//!
//! For each crash in a partition: the id of the nearest road point and the
//! planar distance to it.  Conceptually O(crashes × points); the R-tree
//! makes it O(crashes × log points) with results identical to brute force
//! (the tests hold it to that with an oracle).

use icr_features::CrashEvent;

use crate::index::PointIndex;
use crate::point::Assignment;

/// Assign every crash to its nearest road point.
///
/// Output order follows input order; distances are native units.  No
/// threshold is applied here — the aggregator owns the cutoff (after unit
/// conversion).
pub fn assign_nearest(crashes: &[&CrashEvent], index: &PointIndex) -> Vec<Assignment> {
    crashes
        .iter()
        .map(|crash| {
            let (point, distance) = index.nearest(crash.pos);
            Assignment {
                crash: crash.id,
                point,
                distance,
            }
        })
        .collect()
}
