//! Pipeline error type.
//!
//! Stage errors from the sub-crates compose in via `#[from]`.  Where an
//! error aborts is a property of *when* it occurs, not its variant: feature
//! errors surface during whole-dataset filtering and abort the run (no
//! partition could succeed); anything raised inside a state's route loop
//! aborts that state only, and the run moves to the next state.

use thiserror::Error;

use icr_assign::AssignError;
use icr_features::FeatureError;
use icr_geom::GeometryError;
use icr_output::OutputError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("feature error: {0}")]
    Feature(#[from] FeatureError),

    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("assignment error: {0}")]
    Assign(#[from] AssignError),

    #[error("output error: {0}")]
    Output(#[from] OutputError),

    #[error("run cancelled")]
    Cancelled,
}

pub type PipelineResult<T> = Result<T, PipelineError>;
