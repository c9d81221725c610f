//! Seams to the external lattice field theory library.
//!
//! The engine orchestrates; these three traits do the physics. All take
//! `&self` and are called synchronously, in sequence.

use crate::error::{ContractionError, SmearError, SolveError};
use crate::key::ChannelCorrelators;
use crate::smearing::SmearingParameters;
use crate::solve::SolveRequest;
use crate::tensor::{Propagator, SpinorField};

/// Computes quark propagators by inverting the Dirac operator.
///
/// Source smearing is a property of the solve: it modifies the right-hand
/// side, so it cannot be applied after the fact.
pub trait PropagatorSolver {
    /// Solve for the propagator described by `request`.
    fn solve(&self, request: &SolveRequest<'_>) -> Result<Propagator, SolveError>;
}

/// The local smearing primitive applied to one spinor sub-block.
///
/// The field is one [`Propagator::block`]: `(spin_out, color_out)` is fixed
/// and the kernel sees the `(spin_in, color_in)` column indices at every
/// site. Spatial hopping acts on the site index only. A kernel that
/// transports color through gauge links mixes `color_in`, so it must be
/// written against this layout.
///
/// # Contract
///
/// - Must return a field with the same shape as `field`.
/// - Must not depend on anything but `field` and `params` (deterministic).
/// - `params.iterations() == 0` must return a copy of `field`.
pub trait SmearingKernel {
    /// Smear one spinor field.
    fn smear(&self, field: &SpinorField, params: SmearingParameters)
        -> Result<SpinorField, SmearError>;
}

/// Contracts two propagators into all 256 meson correlators.
pub trait MesonContractor {
    /// Contract `first` (mass 1) with `second` (mass 2).
    fn contract(
        &self,
        first: &Propagator,
        second: &Propagator,
    ) -> Result<ChannelCorrelators, ContractionError>;
}

impl<T: PropagatorSolver + ?Sized> PropagatorSolver for &T {
    fn solve(&self, request: &SolveRequest<'_>) -> Result<Propagator, SolveError> {
        (**self).solve(request)
    }
}

impl<T: SmearingKernel + ?Sized> SmearingKernel for &T {
    fn smear(
        &self,
        field: &SpinorField,
        params: SmearingParameters,
    ) -> Result<SpinorField, SmearError> {
        (**self).smear(field, params)
    }
}

impl<T: MesonContractor + ?Sized> MesonContractor for &T {
    fn contract(
        &self,
        first: &Propagator,
        second: &Propagator,
    ) -> Result<ChannelCorrelators, ContractionError> {
        (**self).contract(first, second)
    }
}
