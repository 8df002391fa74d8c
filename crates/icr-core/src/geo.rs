//! Coordinate types.
//!
//! Two coordinate spaces flow through the pipeline:
//!
//! - [`GeoPoint`] — WGS-84 latitude/longitude as read from the source
//!   datasets.  Only ever an *input*; no distance math happens here.
//! - [`PlanePoint`] — a planar coordinate after projection into the fixed
//!   equal-distance conic system.  All sampling offsets, join distances, and
//!   nearest-crash distances are Euclidean distances between `PlanePoint`s,
//!   expressed in the projection's native linear unit (meters).
//!
//! Both use `f64`: crash-to-point distances are compared against a strict
//! threshold, so the extra precision over `f32` matters at the boundary.

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// A projected planar coordinate in native linear units (meters).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

impl PlanePoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance.  Cheaper than [`distance`](Self::distance)
    /// for comparisons; take the square root only when the actual distance is
    /// recorded.
    #[inline]
    pub fn distance_sq(self, other: PlanePoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance in native linear units.
    #[inline]
    pub fn distance(self, other: PlanePoint) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Linear interpolation: the point a fraction `t` of the way to `other`.
    #[inline]
    pub fn lerp(self, other: PlanePoint, t: f64) -> PlanePoint {
        PlanePoint {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

impl std::fmt::Display for PlanePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
