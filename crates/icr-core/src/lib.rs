//! `icr-core` — foundational types for the `icr` interstate crash-rate
//! pipeline.
//!
//! This crate is a dependency of every other `icr-*` crate.  It intentionally
//! has no `icr-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `SegmentId`, `PointId`, `CrashId`                     |
//! | [`geo`]      | `GeoPoint` (WGS-84), `PlanePoint` (projected planar)  |
//! | [`units`]    | `LinearUnit` and the fixed conversion factors         |
//! | [`key`]      | `PartitionKey` (state code, route number)             |
//! | [`config`]   | `PipelineConfig`                                      |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod key;
pub mod units;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PipelineConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{GeoPoint, PlanePoint};
pub use ids::{CrashId, PointId, SegmentId};
pub use key::PartitionKey;
pub use units::LinearUnit;
