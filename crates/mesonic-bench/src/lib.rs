//! Benchmark profiles for the Mesonic smearing engine.
//!
//! - [`reference_lattice`]: 8³×16, a small production-style lattice
//! - [`stress_lattice`]: 16³×32 for smearing throughput
//! - [`propagator_pair`]: two seeded propagators on a given lattice

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use mesonic_core::{LatticeShape, Propagator, SmearingParameters, TensorError};
use mesonic_engine::{CorrelatorPipeline, GammaTraceContractor, MeasurementConfig};
use mesonic_smear::JacobiKernel;
use mesonic_test_utils::{random_propagator, SeededSolver};

/// 8³×16 lattice.
pub fn reference_lattice() -> Result<LatticeShape, TensorError> {
    LatticeShape::cubic(8, 16)
}

/// 16³×32 lattice.
pub fn stress_lattice() -> Result<LatticeShape, TensorError> {
    LatticeShape::cubic(16, 32)
}

/// The smearing used by the standard measurement: 2 iterations at 0.4.
pub fn standard_smearing() -> SmearingParameters {
    SmearingParameters::new(2, 0.4).unwrap_or_else(|_| SmearingParameters::identity())
}

/// Two independent seeded propagators on `shape`.
pub fn propagator_pair(shape: LatticeShape, seed: u64) -> (Propagator, Propagator) {
    (
        random_propagator(shape, seed),
        random_propagator(shape, seed.wrapping_add(1)),
    )
}

/// Full pipeline with the reference kernel and contractor.
pub fn reference_pipeline(
    shape: LatticeShape,
) -> CorrelatorPipeline<SeededSolver, JacobiKernel, GammaTraceContractor> {
    CorrelatorPipeline::new(
        SeededSolver::new(shape),
        JacobiKernel::periodic(),
        GammaTraceContractor::new(),
        MeasurementConfig::default(),
    )
}
