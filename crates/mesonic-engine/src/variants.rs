//! Propagator variant builder.
//!
//! For one quark mass produces the four smearing variants:
//!
//! | Label | Construction                     |
//! |-------|----------------------------------|
//! | `LL`  | plain solve                      |
//! | `SL`  | solve with source smearing       |
//! | `LS`  | sink-smear(`LL`)                 |
//! | `SS`  | sink-smear(`SL`)                 |
//!
//! Exactly two solves and two sink smearings per mass.

use mesonic_core::{
    LatticeShape, MeasurementError, Propagator, PropagatorSolver, SmearingKernel, SmearingLabel,
    SmearingParameters, SmearingPlan, SolveError, SolveRequest, SolverConfig, TensorError,
};
use mesonic_smear::SinkSmearer;
use tracing::debug;

/// The four smearing variants of one mass, each exclusively owned.
#[derive(Clone, Debug, PartialEq)]
pub struct PropagatorVariants {
    ll: Propagator,
    ls: Propagator,
    sl: Propagator,
    ss: Propagator,
}

impl PropagatorVariants {
    /// Assemble from already-computed variants.
    ///
    /// Returns `Err(TensorError::ShapeMismatch)` if they do not share a
    /// lattice shape.
    pub fn new(
        ll: Propagator,
        ls: Propagator,
        sl: Propagator,
        ss: Propagator,
    ) -> Result<Self, TensorError> {
        let expected = ll.shape();
        for actual in [ls.shape(), sl.shape(), ss.shape()] {
            if actual != expected {
                return Err(TensorError::ShapeMismatch { expected, actual });
            }
        }
        Ok(Self { ll, ls, sl, ss })
    }

    /// The variant with the given label.
    pub fn get(&self, label: SmearingLabel) -> &Propagator {
        match label {
            SmearingLabel::LL => &self.ll,
            SmearingLabel::LS => &self.ls,
            SmearingLabel::SL => &self.sl,
            SmearingLabel::SS => &self.ss,
        }
    }

    /// Variants in `LL, LS, SL, SS` order.
    pub fn iter(&self) -> impl Iterator<Item = (SmearingLabel, &Propagator)> + '_ {
        SmearingLabel::ALL.into_iter().map(move |label| (label, self.get(label)))
    }

    /// Lattice shape shared by all four variants.
    pub fn shape(&self) -> LatticeShape {
        self.ll.shape()
    }
}

/// Build the four variants of `mass`.
///
/// Errors carry the mass and the label of the variant being produced.
/// The source site in `config` is checked against the lattice of the
/// first solve.
pub fn build_variants<S, K>(
    solver: &S,
    smearer: &SinkSmearer<K>,
    mass: f64,
    plan: SmearingPlan,
    config: &SolverConfig,
) -> Result<PropagatorVariants, MeasurementError>
where
    S: PropagatorSolver,
    K: SmearingKernel,
{
    let ll = solve(solver, mass, None, config, SmearingLabel::LL)?;
    config.validate_for(ll.shape())?;

    let sl = solve(solver, mass, Some(plan.source), config, SmearingLabel::SL)?;
    if sl.shape() != ll.shape() {
        return Err(MeasurementError::Solve {
            mass,
            label: SmearingLabel::SL,
            source: SolveError::Shape(TensorError::ShapeMismatch {
                expected: ll.shape(),
                actual: sl.shape(),
            }),
        });
    }

    let ls = sink_smear(smearer, &ll, mass, plan.sink, SmearingLabel::LS)?;
    let ss = sink_smear(smearer, &sl, mass, plan.sink, SmearingLabel::SS)?;

    Ok(PropagatorVariants { ll, ls, sl, ss })
}

fn solve<S: PropagatorSolver>(
    solver: &S,
    mass: f64,
    source_smearing: Option<SmearingParameters>,
    config: &SolverConfig,
    label: SmearingLabel,
) -> Result<Propagator, MeasurementError> {
    let request = SolveRequest {
        mass,
        source_smearing,
        config,
    };
    let prop = solver
        .solve(&request)
        .map_err(|source| MeasurementError::Solve {
            mass,
            label,
            source,
        })?;
    debug!(mass, %label, shape = %prop.shape(), "solved propagator");
    Ok(prop)
}

fn sink_smear<K: SmearingKernel>(
    smearer: &SinkSmearer<K>,
    prop: &Propagator,
    mass: f64,
    params: SmearingParameters,
    label: SmearingLabel,
) -> Result<Propagator, MeasurementError> {
    let out = smearer
        .smear(prop, params)
        .map_err(|source| MeasurementError::Smear {
            mass,
            label,
            source,
        })?;
    debug!(mass, %label, "sink-smeared variant");
    Ok(out)
}
