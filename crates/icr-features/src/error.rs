//! Feature-subsystem error type.

use thiserror::Error;

/// Errors produced by `icr-features`.
///
/// `Schema` is the fatal one: a required attribute is missing from the whole
/// dataset, so no partition could succeed and the run aborts.
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("required attribute {field:?} not found in {dataset} dataset")]
    Schema {
        dataset: &'static str,
        field: &'static str,
    },

    #[error("row {row}: {expected} geometry expected")]
    WrongGeometry { row: usize, expected: &'static str },

    #[error("row {row}: cannot parse {what}: {value:?}")]
    Parse {
        row: usize,
        what: &'static str,
        value: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type FeatureResult<T> = Result<T, FeatureError>;
