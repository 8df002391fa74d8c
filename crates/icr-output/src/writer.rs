//! The `RateWriter` trait implemented by all backend writers.

use crate::{OutputResult, RatePointRow};

/// Backend seam for emitting one state's merged records.
///
/// The orchestrator calls [`write_state`](Self::write_state) once per
/// completed state, in ascending state order, and
/// [`finish`](Self::finish) once at the end of the run.
pub trait RateWriter {
    /// Write the merged rows of one state.
    fn write_state(&mut self, state_code: u32, rows: &[RatePointRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
