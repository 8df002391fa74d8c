//! State and route partitioning.
//!
//! The orchestrator processes one state at a time, one route at a time.
//! Partitions borrow from the filtered datasets — nothing is copied and no
//! partition can touch another's features.  State codes and route numbers
//! come out as sorted unique lists, so iteration order (and therefore output
//! order) is deterministic.

use icr_core::PartitionKey;
use rustc_hash::FxHashMap;

use crate::feature::{CrashEvent, RoadSegment};

/// All of one state's interstate segments and crashes.
pub struct StatePartition<'a> {
    pub state_code: u32,
    pub segments: Vec<&'a RoadSegment>,
    pub crashes: Vec<&'a CrashEvent>,
}

/// One (state, route) partition: the unit the sampling/join/assign/aggregate
/// stages run over.
pub struct RoutePartition<'a> {
    pub key: PartitionKey,
    pub segments: Vec<&'a RoadSegment>,
    pub crashes: Vec<&'a CrashEvent>,
}

/// Split the filtered datasets by state, ascending state code.
///
/// A state appears if it has any road segment; crash-only states produce no
/// partition (there are no points to assign their crashes to).
pub fn partition_states<'a>(
    segments: &'a [RoadSegment],
    crashes: &'a [CrashEvent],
) -> Vec<StatePartition<'a>> {
    let mut seg_by_state: FxHashMap<u32, Vec<&RoadSegment>> = FxHashMap::default();
    for seg in segments {
        seg_by_state.entry(seg.state_code).or_default().push(seg);
    }
    let mut crash_by_state: FxHashMap<u32, Vec<&CrashEvent>> = FxHashMap::default();
    for crash in crashes {
        crash_by_state.entry(crash.state_code).or_default().push(crash);
    }

    let mut states: Vec<u32> = seg_by_state.keys().copied().collect();
    states.sort_unstable();

    states
        .into_iter()
        .map(|state_code| StatePartition {
            state_code,
            segments: seg_by_state.remove(&state_code).unwrap_or_default(),
            crashes: crash_by_state.remove(&state_code).unwrap_or_default(),
        })
        .collect()
}

impl<'a> StatePartition<'a> {
    /// Sorted unique route numbers present in this state.
    pub fn routes(&self) -> Vec<u32> {
        let mut routes: Vec<u32> = self.segments.iter().map(|s| s.route_number).collect();
        routes.sort_unstable();
        routes.dedup();
        routes
    }

    /// The (state, route) partition for one route: its segments, plus the
    /// crashes whose way name pairs with the route.
    pub fn route_partition(&self, route_number: u32) -> RoutePartition<'a> {
        let key = PartitionKey::new(self.state_code, route_number);
        let tag = key.route_tag();
        RoutePartition {
            key,
            segments: self
                .segments
                .iter()
                .copied()
                .filter(|s| s.route_number == route_number)
                .collect(),
            crashes: self
                .crashes
                .iter()
                .copied()
                .filter(|c| way_matches_route(&c.way_name, &tag))
                .collect(),
        }
    }
}

/// Crash-to-route pairing: the free-text way name contains the route tag
/// (`I-65`), case-insensitively.
///
/// Substring semantics are deliberate (`tway_id LIKE '%I-65%'`): `I-6`
/// would also match `I-65`, which is how the source data is keyed.
pub fn way_matches_route(way_name: &str, route_tag: &str) -> bool {
    way_name
        .to_ascii_uppercase()
        .contains(&route_tag.to_ascii_uppercase())
}
