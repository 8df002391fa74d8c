//! Assignment-subsystem error type.

use thiserror::Error;

/// Errors produced by `icr-assign`.
#[derive(Debug, Error)]
pub enum AssignError {
    /// A (state, route) partition arrived with nothing to index or join
    /// against.  Cannot happen for partitions built from the road dataset
    /// (every route has at least one segment, every non-empty line at least
    /// one sample), so hitting this means the caller's partitioning is off.
    #[error("empty partition: no {0} to operate on")]
    EmptyPartition(&'static str),
}

pub type AssignResult<T> = Result<T, AssignError>;
