//! Fixed-spacing point sampling along a polyline.
//!
//! The geometric core of the pipeline: turns continuous route geometry into
//! the discrete analysis points everything downstream hangs off.
//!
//! # Contract
//!
//! For a line `L` and spacing `s > 0` the output offsets are `0, s, 2s, …`
//! measured along arc length, starting at the line's start.  The line end is
//! included when `length(L)` is an exact multiple of `s` (within a relative
//! epsilon, so a 1-mile line at 0.1-mile spacing yields 11 points, the last
//! exactly at the end); otherwise the last point falls short of the end and
//! nothing is padded.  Point count is therefore `⌊length/s⌋ + 1`.
//!
//! Any non-empty line yields at least one point: a degenerate line (single
//! coordinate, or zero total length) yields exactly one point at the sole
//! coordinate.  Output is fully deterministic.

use icr_core::PlanePoint;

use crate::error::{GeometryError, GeometryResult};
use crate::polyline::Polyline;

/// Relative tolerance for "offset reaches the line end" so exact-multiple
/// lengths include their endpoint despite accumulated rounding.
const END_EPS_REL: f64 = 1e-9;

/// One sampled analysis point: a position and its arc-length offset from the
/// part start.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampledPoint {
    pub pos: PlanePoint,
    pub offset: f64,
}

/// Sample `line` at fixed `spacing`, per the contract above.
///
/// # Errors
/// - [`GeometryError::Empty`] if the line has no coordinates.
/// - [`GeometryError::InvalidSpacing`] if `spacing <= 0` or is not finite.
pub fn sample_points(line: &Polyline, spacing: f64) -> GeometryResult<Vec<SampledPoint>> {
    if line.is_empty() {
        return Err(GeometryError::Empty);
    }
    if !(spacing > 0.0) || !spacing.is_finite() {
        return Err(GeometryError::InvalidSpacing(spacing));
    }

    let length = line.length();
    if line.is_degenerate() {
        // Exactly one point at the sole coordinate; never an error.
        return Ok(vec![SampledPoint {
            pos: line.coords()[0],
            offset: 0.0,
        }]);
    }

    let eps = length * END_EPS_REL;
    let mut points = Vec::with_capacity((length / spacing) as usize + 1);
    let mut k = 0u64;
    loop {
        let offset = k as f64 * spacing;
        if offset > length + eps {
            break;
        }
        points.push(SampledPoint {
            pos: line.point_at(offset.min(length)),
            offset: offset.min(length),
        });
        k += 1;
    }

    debug_assert!(!points.is_empty());
    Ok(points)
}
