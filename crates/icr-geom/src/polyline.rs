//! Planar polyline with arc-length queries.

use icr_core::PlanePoint;

/// An ordered sequence of projected coordinates forming one line part.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polyline {
    coords: Vec<PlanePoint>,
}

impl Polyline {
    pub fn new(coords: Vec<PlanePoint>) -> Self {
        Self { coords }
    }

    pub fn coords(&self) -> &[PlanePoint] {
        &self.coords
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn start(&self) -> Option<PlanePoint> {
        self.coords.first().copied()
    }

    pub fn end(&self) -> Option<PlanePoint> {
        self.coords.last().copied()
    }

    /// Total arc length in native units.  0 for fewer than two coordinates.
    pub fn length(&self) -> f64 {
        self.coords
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum()
    }

    /// True when the line cannot carry more than one sample: a single
    /// coordinate, or all coordinates coincident.
    pub fn is_degenerate(&self) -> bool {
        self.coords.len() < 2 || self.length() == 0.0
    }

    /// The point at arc-length `offset` from the start, clamped to the line.
    ///
    /// Walks the segments accumulating length and interpolates within the
    /// segment containing `offset`.  Offsets past the end return the last
    /// coordinate.
    ///
    /// # Panics
    /// Panics if the line has no coordinates; callers check `is_empty` first
    /// (the sampler returns [`GeometryError::Empty`][crate::GeometryError]
    /// before ever calling this).
    pub fn point_at(&self, offset: f64) -> PlanePoint {
        assert!(!self.coords.is_empty(), "point_at on empty polyline");
        if offset <= 0.0 || self.coords.len() == 1 {
            return self.coords[0];
        }

        let mut walked = 0.0;
        for w in self.coords.windows(2) {
            let seg_len = w[0].distance(w[1]);
            if walked + seg_len >= offset && seg_len > 0.0 {
                let t = (offset - walked) / seg_len;
                return w[0].lerp(w[1], t);
            }
            walked += seg_len;
        }
        // Past the end (floating-point shortfall included).
        self.coords[self.coords.len() - 1]
    }

    /// Minimum distance from `p` to any segment of the line.
    ///
    /// Returns `f64::INFINITY` for an empty line so it always loses a
    /// nearest-candidate comparison.
    pub fn distance_to(&self, p: PlanePoint) -> f64 {
        match self.coords.len() {
            0 => f64::INFINITY,
            1 => p.distance(self.coords[0]),
            _ => self
                .coords
                .windows(2)
                .map(|w| point_segment_distance(p, w[0], w[1]))
                .fold(f64::INFINITY, f64::min),
        }
    }
}

/// Distance from `p` to the segment `a`-`b` (perpendicular foot clamped to
/// the segment).
fn point_segment_distance(p: PlanePoint, a: PlanePoint, b: PlanePoint) -> f64 {
    let len_sq = a.distance_sq(b);
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p.x - a.x) * (b.x - a.x) + (p.y - a.y) * (b.y - a.y)) / len_sq;
    let t = t.clamp(0.0, 1.0);
    p.distance(a.lerp(b, t))
}
