//! `icr-features` — dataset ingestion and partitioning.
//!
//! Takes the two source datasets (road network, crash events) from CSV to
//! typed, projected, partition-ready values:
//!
//! ```text
//! read_*_features → filter_interstate_* → project_* → partition_states
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`attrs`]     | `Value`, `AttrMap` (case-insensitive attribute mapping)  |
//! | [`feature`]   | `Feature`/`RawGeometry`, `RoadSegment`, `CrashEvent`     |
//! | [`reader`]    | CSV feature readers                                      |
//! | [`filter`]    | interstate filters + typed projection                    |
//! | [`partition`] | state/route partitioning, crash-to-route pairing         |
//! | [`error`]     | `FeatureError`, `FeatureResult<T>`                       |

pub mod attrs;
pub mod error;
pub mod feature;
pub mod filter;
pub mod partition;
pub mod reader;


pub use attrs::{AttrMap, Value};
pub use error::{FeatureError, FeatureResult};
pub use feature::{CrashEvent, Feature, RawGeometry, RoadSegment};
pub use filter::{
    filter_interstate_crashes, filter_interstate_roads, project_crashes, project_roads,
};
pub use partition::{RoutePartition, StatePartition, partition_states, way_matches_route};
pub use reader::{read_crash_features, read_road_features};
