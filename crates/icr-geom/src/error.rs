//! Geometry-subsystem error type.

use thiserror::Error;

/// Errors produced by `icr-geom`.
///
/// Degenerate-but-present geometry (one coordinate, zero length) is *not* an
/// error anywhere in this crate; only a line with no coordinates at all is.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("geometry has no coordinates")]
    Empty,

    #[error("sampling spacing must be positive, got {0}")]
    InvalidSpacing(f64),
}

pub type GeometryResult<T> = Result<T, GeometryError>;
