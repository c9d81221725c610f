//! Measurement configuration.
//!
//! [`MeasurementConfig`] bundles the solver options handed to every solve
//! with the engine-side checks applied to contraction output.
//! [`validate()`](MeasurementConfig::validate) runs before the first solve;
//! the source-site check runs once the lattice shape is known.

use mesonic_core::{ConfigError, LatticeShape, SolverConfig};

/// Configuration for one correlator measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementConfig {
    /// Options passed into every propagator solve.
    pub solver: SolverConfig,
    /// Reject correlators containing NaN or infinity. Default: true.
    pub check_finite: bool,
}

impl Default for MeasurementConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            check_finite: true,
        }
    }
}

impl MeasurementConfig {
    /// Check shape-independent invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.solver.validate()
    }

    /// [`validate`](Self::validate) against a concrete lattice.
    pub fn validate_for(&self, shape: LatticeShape) -> Result<(), ConfigError> {
        self.solver.validate_for(shape)
    }
}
