//! The derived entities of a (state, route) partition.

use icr_core::{CrashId, PlanePoint, PointId, SegmentId};

/// A sampled analysis point carrying its segment's attribution.
///
/// Created by [`join_segment_attrs`][crate::join_segment_attrs] with
/// `crash_count = 0`; the count is the only field that ever mutates
/// (written once by the aggregator).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadPoint {
    /// Partition-local id: index into the partition's point vector.
    pub id: PointId,
    pub pos: PlanePoint,
    /// Arc-length offset from the start of the point's dissolved part.
    pub offset: f64,
    /// The segment whose attributes this point inherited.  Transient join
    /// bookkeeping; dropped at the per-state merge.
    pub segment: SegmentId,
    /// Traffic volume inherited from the segment; `None` when the segment
    /// reported none.
    pub aadt: Option<f64>,
    pub crash_count: u32,
}

/// One crash's association to its nearest road point.
///
/// Many crashes may map to the same point; a crash maps to at most one.
/// `distance` is in native units at creation; the aggregator converts it to
/// the analysis unit before the threshold comparison.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub crash: CrashId,
    pub point: PointId,
    pub distance: f64,
}
