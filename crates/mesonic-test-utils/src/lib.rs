//! Test utilities and mock collaborators for Mesonic development.
//!
//! Provides mock implementations of the core seams
//! ([`PropagatorSolver`](mesonic_core::PropagatorSolver),
//! [`SmearingKernel`](mesonic_core::SmearingKernel),
//! [`MesonContractor`](mesonic_core::MesonContractor)) and seeded random
//! propagator builders.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod contractors;
pub mod kernels;
pub mod solvers;

pub use contractors::MockContractor;
pub use kernels::{CopyKernel, FailingKernel, ShapeBreakingKernel};
pub use solvers::{FailingSolver, RecordedSolve, SeededSolver};

use mesonic_core::{Complex64, LatticeShape, Propagator, SITE_MATRIX};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random propagator with entries uniform in `[-1, 1) + i[-1, 1)`.
///
/// The same `(shape, seed)` always yields the same propagator.
pub fn random_propagator(shape: LatticeShape, seed: u64) -> Propagator {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let data = (0..shape.volume() * SITE_MATRIX)
        .map(|_| {
            Complex64::new(
                rng.random::<f64>() * 2.0 - 1.0,
                rng.random::<f64>() * 2.0 - 1.0,
            )
        })
        .collect();
    Propagator::from_data(shape, data).unwrap_or_else(|_| Propagator::zeros(shape))
}

/// The 4³×8 lattice used by most end-to-end tests.
pub fn small_lattice() -> LatticeShape {
    LatticeShape::cubic(4, 8).unwrap_or_else(|e| panic!("4x4x4x8 is a valid shape: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_propagator_is_reproducible() {
        let shape = LatticeShape::cubic(2, 2).unwrap();
        assert_eq!(random_propagator(shape, 7), random_propagator(shape, 7));
        assert_ne!(random_propagator(shape, 7), random_propagator(shape, 8));
    }

    #[test]
    fn random_entries_in_range() {
        let prop = random_propagator(LatticeShape::cubic(2, 1).unwrap(), 1);
        for v in prop.as_slice() {
            assert!((-1.0..1.0).contains(&v.re));
            assert!((-1.0..1.0).contains(&v.im));
        }
    }
}
