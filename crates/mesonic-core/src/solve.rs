//! Solver configuration and the request handed to a propagator solver.
//!
//! Solver options travel with every request instead of living in ambient
//! state, so two pipelines with different verbosity or tolerances can
//! share one solver.

use crate::error::ConfigError;
use crate::shape::LatticeShape;
use crate::smearing::SmearingParameters;

/// Krylov method used for the Dirac inversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolverMethod {
    /// Stabilised biconjugate gradient on the Dirac operator.
    BiCgStab,
    /// Conjugate gradient on the normal equations.
    ConjugateGradient,
}

/// How much progress output the solver should emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verbosity {
    /// No output.
    Silent,
    /// One line per solve.
    Summary,
    /// Per-iteration residuals.
    Iterations,
}

/// Options passed into every solve.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Inversion algorithm. Default: BiCGSTAB.
    pub method: SolverMethod,
    /// Use even-odd preconditioning. Default: true.
    pub precondition: bool,
    /// Solver output level. Default: `Summary`.
    pub verbosity: Verbosity,
    /// Relative residual tolerance. Default: 1e-8.
    pub tolerance: f64,
    /// Iteration cap. Default: 1000.
    pub max_iterations: u32,
    /// Point-source site `[x, y, z, t]`. Default: origin.
    pub source_site: [usize; 4],
    /// Lattice spacing handed to the Dirac operator. Default: 1.0.
    pub spacing: f64,
    /// Gauge-link smearing iterations applied before the inversion.
    /// Default: 0.
    pub link_smears: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            method: SolverMethod::BiCgStab,
            precondition: true,
            verbosity: Verbosity::Summary,
            tolerance: 1e-8,
            max_iterations: 1000,
            source_site: [0; 4],
            spacing: 1.0,
            link_smears: 0,
        }
    }
}

impl SolverConfig {
    /// Check lattice-independent invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance {
                value: self.tolerance,
            });
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(ConfigError::InvalidSpacing {
                value: self.spacing,
            });
        }
        Ok(())
    }

    /// [`validate`](Self::validate) plus a check that the source site lies
    /// on `shape`.
    pub fn validate_for(&self, shape: LatticeShape) -> Result<(), ConfigError> {
        self.validate()?;
        if !shape.contains(self.source_site) {
            return Err(ConfigError::SourceOffLattice {
                site: self.source_site,
                shape,
            });
        }
        Ok(())
    }
}

/// One propagator solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolveRequest<'a> {
    /// Bare quark mass.
    pub mass: f64,
    /// Source smearing applied to the right-hand side, if any.
    pub source_smearing: Option<SmearingParameters>,
    /// Solver options.
    pub config: &'a SolverConfig,
}
