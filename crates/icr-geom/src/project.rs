//! Reprojection into the fixed equal-distance analysis system.
//!
//! Every distance in the pipeline (sampling offsets, join distances,
//! crash-to-point distances) is planar, so the inputs are projected once into
//! a single equidistant conic covering the analysis region.  The spherical
//! equidistant conic formulas (Snyder, *Map Projections — A Working Manual*,
//! §16) are a few lines and fully deterministic; a general reprojection
//! engine is scoped out.

use icr_core::{GeoPoint, LinearUnit, PlanePoint};

/// Reprojection seam: geographic in, planar native-unit out.
pub trait Projection {
    fn project(&self, g: GeoPoint) -> PlanePoint;

    /// The linear unit of the projected plane.
    fn native_unit(&self) -> LinearUnit {
        LinearUnit::NATIVE
    }
}

/// Spherical equidistant conic projection.
///
/// Distances along meridians are true, and distortion between the standard
/// parallels is small, which is what makes crash-to-point distances
/// comparable across the whole dataset.
#[derive(Clone, Debug)]
pub struct EquidistantConic {
    /// Cone constant.
    n: f64,
    /// Snyder's G = cos(φ1)/n + φ1.
    g: f64,
    /// Radial distance of the latitude of origin.
    rho0: f64,
    /// Central meridian, radians.
    lam0: f64,
    /// Sphere radius, meters.
    radius: f64,
}

impl EquidistantConic {
    /// Sphere radius of the reference system, meters (authalic, Clarke 1866).
    pub const SPHERE_RADIUS_M: f64 = 6_370_997.0;

    /// Build a projection from standard parallels `lat1`/`lat2`, latitude of
    /// origin `lat0`, and central meridian `lon0` (all degrees).
    pub fn new(lat1: f64, lat2: f64, lat0: f64, lon0: f64) -> Self {
        let (p1, p2) = (lat1.to_radians(), lat2.to_radians());
        let n = if (p1 - p2).abs() < 1e-12 {
            p1.sin()
        } else {
            (p1.cos() - p2.cos()) / (p2 - p1)
        };
        let g = p1.cos() / n + p1;
        let rho0 = Self::SPHERE_RADIUS_M * (g - lat0.to_radians());
        Self {
            n,
            g,
            rho0,
            lam0: lon0.to_radians(),
            radius: Self::SPHERE_RADIUS_M,
        }
    }

    /// The standard analysis system: USA Contiguous
    /// Equidistant Conic (standard parallels 33°N/45°N, origin 39°N 96°W).
    pub fn usa_contiguous() -> Self {
        Self::new(33.0, 45.0, 39.0, -96.0)
    }
}

impl Projection for EquidistantConic {
    fn project(&self, p: GeoPoint) -> PlanePoint {
        let rho = self.radius * (self.g - p.lat.to_radians());
        let theta = self.n * (p.lon.to_radians() - self.lam0);
        PlanePoint {
            x: rho * theta.sin(),
            y: self.rho0 - rho * theta.cos(),
        }
    }
}
