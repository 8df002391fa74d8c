//! Pipeline observer trait for progress reporting.
//!
//! The informational stream of the analysis.  Runs are long, so instead of
//! printing "processing state N…" lines the pipeline calls observer hooks
//! with the structured equivalents.  All
//! methods have default no-op implementations so implementors only override
//! what they care about.

use icr_core::PartitionKey;

use crate::error::PipelineError;
use crate::pipeline::RunSummary;

/// Callbacks invoked by [`Pipeline::run`][crate::Pipeline::run] at key
/// points of the run.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl PipelineObserver for ProgressPrinter {
///     fn on_state_start(&mut self, state_code: u32, routes: usize) {
///         println!("processing state {state_code} ({routes} routes)…");
///     }
/// }
/// ```
pub trait PipelineObserver {
    /// Both datasets have been filtered and projected.
    fn on_filtered(&mut self, _roads_kept: usize, _crashes_kept: usize) {}

    /// A state's processing is starting.
    fn on_state_start(&mut self, _state_code: u32, _routes: usize) {}

    /// One route's stage sequence completed.
    ///
    /// `points` is the number of sampled points; `qualifying` the number of
    /// crashes within the distance threshold.
    fn on_route_done(&mut self, _key: PartitionKey, _points: usize, _qualifying: usize) {}

    /// A state's processing failed and was abandoned.
    ///
    /// `route` names the failing route when the error is route-local;
    /// `None` when it struck at the state level (e.g. emitting output).
    /// Prior states' emitted output is unaffected.
    fn on_state_error(&mut self, _state_code: u32, _route: Option<u32>, _error: &PipelineError) {}

    /// A state's merged records were handed to the writer.
    fn on_state_emitted(&mut self, _state_code: u32, _records: usize) {}

    /// All states processed and the writer closed cleanly.  Not called when
    /// the run aborts with a schema error or cancellation.
    fn on_finished(&mut self, _summary: &RunSummary) {}
}

/// A [`PipelineObserver`] that does nothing.  Use when you need to call
/// `run` but don't want progress callbacks.
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}
