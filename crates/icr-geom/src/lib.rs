//! `icr-geom` — line geometry and the geometric stages of the pipeline.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`polyline`] | `Polyline` (arc length, interpolation, point distance)    |
//! | [`sample`]   | `sample_points` — fixed-spacing points along a line       |
//! | [`dissolve`] | `dissolve` — chain touching parts into logical routes     |
//! | [`project`]  | `Projection` trait, `EquidistantConic`                    |
//! | [`error`]    | `GeometryError`, `GeometryResult<T>`                      |
//!
//! All distances and offsets are planar, in the projection's native unit
//! (meters).  Geometry enters as WGS-84 and is projected exactly once, before
//! any of the other modules see it.

pub mod dissolve;
pub mod error;
pub mod polyline;
pub mod project;
pub mod sample;


pub use dissolve::dissolve;
pub use error::{GeometryError, GeometryResult};
pub use polyline::Polyline;
pub use project::{EquidistantConic, Projection};
pub use sample::{SampledPoint, sample_points};
