//! `icr-pipeline` — the crash-rate pipeline orchestrator.
//!
//! Sequences the whole analysis: read and filter both datasets, project
//! them, then per state and per route run sampling → attribute join →
//! nearest-crash assignment → aggregation, merge each state's routes, and
//! emit one output collection per state.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`pipeline`] | `Pipeline`, `RunSummary`, the convenience `run`        |
//! | [`observer`] | `PipelineObserver` trait, `NoopObserver`               |
//! | [`cancel`]   | `CancelToken` — cooperative cancellation               |
//! | [`error`]    | `PipelineError`, `PipelineResult<T>`                   |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Routes within a state run on Rayon's thread pool.        |

pub mod cancel;
pub mod error;
pub mod observer;
pub mod pipeline;


pub use cancel::CancelToken;
pub use error::{PipelineError, PipelineResult};
pub use observer::{NoopObserver, PipelineObserver};
pub use pipeline::{Pipeline, RunSummary, run};
