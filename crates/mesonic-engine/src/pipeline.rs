//! The correlator measurement pipeline.
//!
//! Solve, smear, contract, aggregate:
//!
//! 1. Validate the [`MeasurementConfig`].
//! 2. Build the four variants of mass 1, then of mass 2.
//! 3. Contract all 16 pairings.
//! 4. Drop the variants and merge the pairings into a [`CorrelatorSet`].
//!
//! Everything runs synchronously on the calling thread; the first error
//! aborts the measurement.

use crate::aggregate::{aggregate, CorrelatorSet};
use crate::combinator::combine;
use crate::config::MeasurementConfig;
use crate::variants::build_variants;
use mesonic_core::{
    MeasurementError, MesonContractor, PropagatorSolver, SmearingKernel, SmearingParameters,
    SmearingPlan,
};
use mesonic_smear::SinkSmearer;
use tracing::info;

/// Owns the three collaborators and the configuration of a measurement.
///
/// # Examples
///
/// ```
/// use mesonic_core::{LatticeShape, SmearingParameters};
/// use mesonic_engine::{CorrelatorPipeline, MeasurementConfig};
/// use mesonic_smear::JacobiKernel;
/// use mesonic_test_utils::{MockContractor, SeededSolver};
///
/// let shape = LatticeShape::cubic(2, 4).unwrap();
/// let pipeline = CorrelatorPipeline::new(
///     SeededSolver::new(shape),
///     JacobiKernel::periodic(),
///     MockContractor::new(),
///     MeasurementConfig::default(),
/// );
/// let smearing = SmearingParameters::new(2, 0.4).unwrap();
/// let set = pipeline.compute_correlator_set(0.4, 0.03, smearing).unwrap();
/// assert_eq!(set.len(), 4096);
/// ```
pub struct CorrelatorPipeline<S, K, C> {
    solver: S,
    smearer: SinkSmearer<K>,
    contractor: C,
    config: MeasurementConfig,
}

impl<S, K, C> CorrelatorPipeline<S, K, C>
where
    S: PropagatorSolver,
    K: SmearingKernel,
    C: MesonContractor,
{
    /// Assemble a pipeline.
    pub fn new(solver: S, kernel: K, contractor: C, config: MeasurementConfig) -> Self {
        Self {
            solver,
            smearer: SinkSmearer::new(kernel),
            contractor,
            config,
        }
    }

    /// The propagator solver.
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// The sink smearer wrapping the kernel.
    pub fn smearer(&self) -> &SinkSmearer<K> {
        &self.smearer
    }

    /// The meson contractor.
    pub fn contractor(&self) -> &C {
        &self.contractor
    }

    /// The measurement configuration.
    pub fn config(&self) -> &MeasurementConfig {
        &self.config
    }

    /// Compute all 4096 correlators of the mass pair `(mass_1, mass_2)`.
    ///
    /// A single [`SmearingParameters`] converts into a plan that uses it at
    /// both source and sink.
    pub fn compute_correlator_set(
        &self,
        mass_1: f64,
        mass_2: f64,
        smearing: impl Into<SmearingPlan>,
    ) -> Result<CorrelatorSet, MeasurementError> {
        let plan = smearing.into();
        self.config.validate()?;
        info!(
            mass_1,
            mass_2,
            source_iterations = plan.source.iterations(),
            sink_iterations = plan.sink.iterations(),
            "starting correlator measurement"
        );

        let solver_config = &self.config.solver;
        let first = build_variants(&self.solver, &self.smearer, mass_1, plan, solver_config)?;
        let second = build_variants(&self.solver, &self.smearer, mass_2, plan, solver_config)?;
        let pairs = combine(&self.contractor, &first, &second, self.config.check_finite)?;
        drop(first);
        drop(second);

        let set = aggregate(pairs)?;
        info!(mass_1, mass_2, entries = set.len(), "correlator measurement complete");
        Ok(set)
    }

    /// [`compute_correlator_set`](Self::compute_correlator_set) with an
    /// unchecked smearing iteration count.
    ///
    /// Returns `Err(MeasurementError::Parameters)` for a negative count or
    /// a non-finite parameter, before any solve.
    pub fn compute_with_params(
        &self,
        mass_1: f64,
        mass_2: f64,
        n_smears: i64,
        parameter: f64,
    ) -> Result<CorrelatorSet, MeasurementError> {
        let params = SmearingParameters::new(n_smears, parameter)?;
        self.compute_correlator_set(mass_1, mass_2, params)
    }
}

/// Free-function form of [`CorrelatorPipeline::compute_correlator_set`].
pub fn compute_correlator_set<S, K, C>(
    solver: &S,
    kernel: &K,
    contractor: &C,
    config: &MeasurementConfig,
    mass_1: f64,
    mass_2: f64,
    smearing: impl Into<SmearingPlan>,
) -> Result<CorrelatorSet, MeasurementError>
where
    S: PropagatorSolver,
    K: SmearingKernel,
    C: MesonContractor,
{
    CorrelatorPipeline::new(solver, kernel, contractor, config.clone())
        .compute_correlator_set(mass_1, mass_2, smearing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesonic_core::{ConfigError, LatticeShape};
    use mesonic_smear::JacobiKernel;
    use mesonic_test_utils::{MockContractor, SeededSolver};

    type MockPipeline = CorrelatorPipeline<SeededSolver, JacobiKernel, MockContractor>;

    fn pipeline(shape: LatticeShape) -> MockPipeline {
        CorrelatorPipeline::new(
            SeededSolver::new(shape),
            JacobiKernel::periodic(),
            MockContractor::new(),
            MeasurementConfig::default(),
        )
    }

    #[test]
    fn negative_iterations_rejected_before_solving() {
        let p = pipeline(LatticeShape::cubic(2, 2).unwrap());
        let err = p.compute_with_params(0.4, 0.03, -1, 0.4).unwrap_err();
        assert!(matches!(err, MeasurementError::Parameters(_)));
        assert_eq!(p.solver().calls(), 0);
    }

    #[test]
    fn invalid_config_rejected_before_solving() {
        let shape = LatticeShape::cubic(2, 2).unwrap();
        let mut config = MeasurementConfig::default();
        config.solver.tolerance = -1.0;
        let p = CorrelatorPipeline::new(
            SeededSolver::new(shape),
            JacobiKernel::periodic(),
            MockContractor::new(),
            config,
        );
        let err = p
            .compute_correlator_set(0.4, 0.03, SmearingParameters::identity())
            .unwrap_err();
        assert!(matches!(
            err,
            MeasurementError::Config(ConfigError::InvalidTolerance { .. })
        ));
        assert_eq!(p.solver().calls(), 0);
    }

    #[test]
    fn free_function_matches_pipeline() {
        let shape = LatticeShape::cubic(2, 2).unwrap();
        let params = SmearingParameters::new(1, 0.3).unwrap();
        let solver = SeededSolver::new(shape);
        let contractor = MockContractor::new();
        let free = compute_correlator_set(
            &solver,
            &JacobiKernel::periodic(),
            &contractor,
            &MeasurementConfig::default(),
            0.2,
            0.1,
            params,
        )
        .unwrap();
        let owned = pipeline(shape).compute_correlator_set(0.2, 0.1, params).unwrap();
        assert_eq!(free, owned);
        assert_eq!(solver.calls(), 4);
        assert_eq!(contractor.calls(), 16);
    }
}
