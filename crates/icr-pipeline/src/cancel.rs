//! Cooperative cancellation.
//!
//! The pipeline checks the token at partition boundaries (before each state
//! and each route), never mid-stage, so cancellation latency is bounded by
//! one partition's processing time.  Clone the token before starting the
//! run and flip it from wherever (another thread, a signal handler).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared cancellation flag.  Cheap to clone; all clones observe the same
/// flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.  Idempotent; never un-cancels.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
