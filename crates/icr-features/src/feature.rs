//! Raw and typed feature representations.
//!
//! A [`Feature`] is what the readers produce: geometry in WGS-84 plus the
//! full attribute mapping, nothing interpreted.  After filtering, features
//! are projected and narrowed into [`RoadSegment`] / [`CrashEvent`], which is
//! all the rest of the pipeline ever sees.

use icr_core::{CrashId, GeoPoint, PlanePoint, SegmentId};
use icr_geom::Polyline;

use crate::attrs::AttrMap;

/// Unprojected source geometry.
#[derive(Clone, Debug, PartialEq)]
pub enum RawGeometry {
    Line(Vec<GeoPoint>),
    Point(GeoPoint),
}

/// One raw feature: geometry plus its attribute mapping.
#[derive(Clone, Debug)]
pub struct Feature {
    pub geometry: RawGeometry,
    pub attrs: AttrMap,
}

/// A filtered, projected road segment.  Immutable once created.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadSegment {
    pub id: SegmentId,
    /// FIPS state code (`state_code` attribute).
    pub state_code: u32,
    /// Interstate route number (`route_numb` attribute).
    pub route_number: u32,
    /// Annual average daily traffic (`aadt_vn`); `None` when unreported.
    pub aadt: Option<f64>,
    pub line: Polyline,
}

/// A filtered, projected crash event.  Immutable once created.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrashEvent {
    pub id: CrashId,
    /// FIPS state code (`state` attribute).
    pub state_code: u32,
    /// Free-text trafficway identifier (`tway_id`), matched against "I-N".
    pub way_name: String,
    pub pos: PlanePoint,
}
