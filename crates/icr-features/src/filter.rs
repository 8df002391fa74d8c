//! Interstate filters and typed projection.
//!
//! Both filters run once over the whole raw dataset, before any
//! partitioning.  They check schema against the first feature's attribute
//! set (the readers give every row the same columns) and fail with
//! [`FeatureError::Schema`] when a required attribute is absent — that error
//! aborts the entire run, since no partition could succeed without it.
//!
//! `project_*` then reprojects the survivors into the analysis plane and
//! narrows them to the typed structs the rest of the pipeline consumes.

use icr_core::{CrashId, SegmentId};
use icr_geom::{Polyline, Projection};

use crate::attrs::Value;
use crate::error::{FeatureError, FeatureResult};
use crate::feature::{CrashEvent, Feature, RawGeometry, RoadSegment};

/// Functional-system code for interstates.
const INTERSTATE_FSYSTEM: f64 = 1.0;

/// Keep road features whose functional-system attribute equals 1.
///
/// The attribute is located by *substring*: the first column whose name
/// contains `f_system` (case-insensitive), since the source carries it under
/// varying names.
pub fn filter_interstate_roads(features: Vec<Feature>) -> FeatureResult<Vec<Feature>> {
    let Some(first) = features.first() else {
        return Ok(features);
    };
    let field = first
        .attrs
        .find_containing("f_system")
        .map(|(name, _)| name.to_string())
        .ok_or(FeatureError::Schema {
            dataset: "road",
            field: "f_system",
        })?;

    Ok(features
        .into_iter()
        .filter(|f| f.attrs.get_num(&field) == Some(INTERSTATE_FSYSTEM))
        .collect())
}

/// Keep crash features with a valid position that occurred on an interstate:
/// `x_y_valid = 1 AND a_inter = 1`.
pub fn filter_interstate_crashes(features: Vec<Feature>) -> FeatureResult<Vec<Feature>> {
    let Some(first) = features.first() else {
        return Ok(features);
    };
    for field in ["x_y_valid", "a_inter"] {
        if first.attrs.get(field).is_none() {
            return Err(FeatureError::Schema {
                dataset: "crash",
                field,
            });
        }
    }

    Ok(features
        .into_iter()
        .filter(|f| {
            f.attrs.get_num("x_y_valid") == Some(1.0) && f.attrs.get_num("a_inter") == Some(1.0)
        })
        .collect())
}

/// Project filtered road features and narrow them to [`RoadSegment`]s.
///
/// Requires `state_code` and `route_numb` on every row; `aadt_vn` is carried
/// through when present and numeric.
pub fn project_roads(
    features: &[Feature],
    projection: &impl Projection,
) -> FeatureResult<Vec<RoadSegment>> {
    features
        .iter()
        .enumerate()
        .map(|(i, f)| {
            let state_code = required_code(f, "road", "state_code")?;
            let route_number = required_code(f, "road", "route_numb")?;
            let aadt = f.attrs.get_num("aadt_vn").filter(|v| *v > 0.0);

            let RawGeometry::Line(ref coords) = f.geometry else {
                return Err(FeatureError::WrongGeometry { row: i, expected: "line" });
            };
            let line = Polyline::new(coords.iter().map(|&g| projection.project(g)).collect());

            Ok(RoadSegment {
                id: SegmentId(i as u32),
                state_code,
                route_number,
                aadt,
                line,
            })
        })
        .collect()
}

/// Project filtered crash features and narrow them to [`CrashEvent`]s.
///
/// Requires `state` and `tway_id` columns on every row.
pub fn project_crashes(
    features: &[Feature],
    projection: &impl Projection,
) -> FeatureResult<Vec<CrashEvent>> {
    features
        .iter()
        .enumerate()
        .map(|(i, f)| {
            let state_code = required_code(f, "crash", "state")?;
            let way_name = match f.attrs.get("tway_id") {
                Some(Value::Text(s)) => s.clone(),
                Some(Value::Num(n)) => n.to_string(),
                Some(Value::Null) => String::new(),
                None => {
                    return Err(FeatureError::Schema {
                        dataset: "crash",
                        field: "tway_id",
                    });
                }
            };

            let RawGeometry::Point(g) = f.geometry else {
                return Err(FeatureError::WrongGeometry { row: i, expected: "point" });
            };

            Ok(CrashEvent {
                id: CrashId(i as u32),
                state_code,
                way_name,
                pos: projection.project(g),
            })
        })
        .collect()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn required_code(f: &Feature, dataset: &'static str, field: &'static str) -> FeatureResult<u32> {
    f.attrs
        .get_num(field)
        .map(|v| v as u32)
        .ok_or(FeatureError::Schema { dataset, field })
}
