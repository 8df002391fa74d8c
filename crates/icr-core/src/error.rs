//! Core error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` impls or wrap it as one variant.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// Errors produced by `icr-core` itself.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown linear unit: {0:?} (expected meters, kilometers, miles, or feet)")]
    UnknownUnit(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `icr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
