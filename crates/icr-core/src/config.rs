//! Pipeline configuration.
//!
//! No ambient state: workspace path, analysis unit, and tool parameters are
//! explicit values passed to the orchestrator and threaded through each
//! stage call.

use std::path::PathBuf;

use crate::units::LinearUnit;

/// Default sampling spacing: 0.1 mile, in native meters.
pub const DEFAULT_SPACING_NATIVE: f64 = 0.1 / 0.000_621_37;

/// Top-level pipeline configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PipelineConfig {
    /// Point spacing along dissolved route geometry, in native units
    /// (meters).  Default: 0.1 mile.
    pub spacing_native: f64,

    /// Crash inclusion threshold, expressed in `unit`.  A crash whose
    /// nearest-point distance (after conversion) is `>= near_dist` counts
    /// toward no point; the comparison is strictly `<`.
    pub near_dist: f64,

    /// Analysis unit recorded distances are converted into before the
    /// threshold comparison.
    pub unit: LinearUnit,

    /// Directory the per-state output files are written into.
    pub output_dir: PathBuf,
}

impl PipelineConfig {
    /// Configuration with the standard defaults: 0.1-mile spacing and
    /// native-unit distances.  `near_dist` is then in meters.
    pub fn new(output_dir: impl Into<PathBuf>, near_dist: f64) -> Self {
        Self {
            spacing_native: DEFAULT_SPACING_NATIVE,
            near_dist,
            unit: LinearUnit::NATIVE,
            output_dir: output_dir.into(),
        }
    }

    /// Set the analysis unit.  `near_dist` is interpreted in this unit.
    pub fn unit(mut self, unit: LinearUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Override the sampling spacing (native units).
    pub fn spacing_native(mut self, spacing: f64) -> Self {
        self.spacing_native = spacing;
        self
    }
}
