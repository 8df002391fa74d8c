//! R-tree index over a partition's road points.
//!
//! Built once per (state, route) partition, bulk-loaded, and only ever
//! queried afterwards — the shared read-only structure the parallel feature
//! relies on.  Queries return exactly what a brute-force scan over all
//! points would, including the tie-break.

use icr_core::{PlanePoint, PointId};
use rstar::{AABB, PointDistance, RTree, RTreeObject};

use crate::error::{AssignError, AssignResult};
use crate::point::RoadPoint;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[x, y]` position with the associated
/// `PointId`.
#[derive(Clone)]
struct PointEntry {
    point: [f64; 2],
    id: PointId,
}

impl RTreeObject for PointEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for PointEntry {
    /// Squared Euclidean distance in the projected plane.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── PointIndex ────────────────────────────────────────────────────────────────

/// Read-only nearest-neighbor index over one partition's road points.
pub struct PointIndex {
    tree: RTree<PointEntry>,
}

impl PointIndex {
    /// Bulk-load the index.  O(N log N), faster than N inserts.
    ///
    /// # Errors
    /// [`AssignError::EmptyPartition`] if `points` is empty — an index with
    /// nothing in it can answer no query.
    pub fn build(points: &[RoadPoint]) -> AssignResult<Self> {
        if points.is_empty() {
            return Err(AssignError::EmptyPartition("road points"));
        }
        let entries: Vec<PointEntry> = points
            .iter()
            .map(|p| PointEntry {
                point: [p.pos.x, p.pos.y],
                id: p.id,
            })
            .collect();
        Ok(Self {
            tree: RTree::bulk_load(entries),
        })
    }

    /// The nearest point to `pos` and the distance to it (native units).
    ///
    /// Ties at exactly equal distance resolve to the lowest `PointId`: the
    /// iterator is scanned past the first hit for equal-distance neighbors
    /// before choosing, so the result never depends on tree shape.
    pub fn nearest(&self, pos: PlanePoint) -> (PointId, f64) {
        let query = [pos.x, pos.y];
        let mut iter = self.tree.nearest_neighbor_iter_with_distance_2(&query);

        // build() guarantees a non-empty tree.
        let (first, best_d2) = iter
            .next()
            .expect("PointIndex is never empty");

        let mut best_id = first.id;
        for (entry, d2) in iter {
            if d2 > best_d2 {
                break;
            }
            best_id = best_id.min(entry.id);
        }

        (best_id, best_d2.sqrt())
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
