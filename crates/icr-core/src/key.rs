//! Partition key for the state/route processing loops.
//!
//! An explicit value rather than a string-formatted name: intermediates are
//! indexed by key in in-memory collections, never looked up by name.

use std::fmt;

/// Identifies one (state, interstate route) partition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitionKey {
    /// FIPS state code.
    pub state_code: u32,
    /// Interstate route number (the N in "I-N").
    pub route_number: u32,
}

impl PartitionKey {
    #[inline]
    pub fn new(state_code: u32, route_number: u32) -> Self {
        Self { state_code, route_number }
    }

    /// The free-text route tag crashes are matched against ("I-65").
    pub fn route_tag(&self) -> String {
        format!("I-{}", self.route_number)
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "state {} / I-{}", self.state_code, self.route_number)
    }
}
