//! `icr-assign` — point attribution and crash-to-point association.
//!
//! The distance-bounded many-to-one heart of the pipeline: sampled points
//! become [`RoadPoint`]s carrying their segment's traffic volume, and each
//! crash becomes at most one [`Assignment`] to its nearest point.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                    |
//! |-----------|-------------------------------------------------------------|
//! | [`point`] | `RoadPoint`, `Assignment`                                   |
//! | [`join`]  | `join_segment_attrs` — one-to-one nearest-segment join      |
//! | [`index`] | `PointIndex` — R-tree over a partition's road points        |
//! | [`near`]  | `assign_nearest` — nearest point + distance per crash       |
//! | [`error`] | `AssignError`, `AssignResult<T>`                            |

pub mod error;
pub mod index;
pub mod join;
pub mod near;
pub mod point;

#[cfg(test)]
mod tests;

pub use error::{AssignError, AssignResult};
pub use index::PointIndex;
pub use join::join_segment_attrs;
pub use near::assign_nearest;
pub use point::{Assignment, RoadPoint};
