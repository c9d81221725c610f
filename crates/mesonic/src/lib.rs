//! Mesonic: lattice propagator smearing and meson correlator combination.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Mesonic sub-crates. For most users, adding `mesonic` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use mesonic::prelude::*;
//!
//! // A stand-in solver returning a constant propagator.
//! struct ConstSolver(LatticeShape);
//! impl PropagatorSolver for ConstSolver {
//!     fn solve(&self, request: &SolveRequest<'_>) -> Result<Propagator, SolveError> {
//!         let n = self.0.volume() * 144;
//!         let data = vec![Complex64::new(request.mass, 0.0); n];
//!         Ok(Propagator::from_data(self.0, data)?)
//!     }
//! }
//!
//! let shape = LatticeShape::cubic(2, 4).unwrap();
//! let pipeline = CorrelatorPipeline::new(
//!     ConstSolver(shape),
//!     JacobiKernel::periodic(),
//!     GammaTraceContractor::new(),
//!     MeasurementConfig::default(),
//! );
//! let smearing = SmearingParameters::new(2, 0.4).unwrap();
//! let set = pipeline.compute_correlator_set(0.4, 0.03, smearing).unwrap();
//! assert_eq!(set.len(), 4096);
//! assert_eq!(set.labels().len(), 16);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `mesonic-core` | Lattice shape, propagators, labels, gammas, errors, traits |
//! | [`space`] | `mesonic-space` | Spatial edge behavior and nearest-neighbour stencils |
//! | [`smear`] | `mesonic-smear` | Jacobi kernel and the sink smearing operator |
//! | [`engine`] | `mesonic-engine` | Variant builder, combinator, aggregator, pipeline |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`mesonic-core`).
///
/// Contains the [`types::Propagator`] tensor view, smearing labels and
/// parameters, the 256 interpolator channels, and the collaborator traits
/// ([`types::PropagatorSolver`], [`types::SmearingKernel`],
/// [`types::MesonContractor`]).
pub use mesonic_core as types;

/// Spatial stencils (`mesonic-space`).
pub use mesonic_space as space;

/// Smearing (`mesonic-smear`).
///
/// [`smear::JacobiKernel`] is the reference kernel; [`smear::SinkSmearer`]
/// applies any kernel to all 12 sub-blocks of a propagator.
pub use mesonic_smear as smear;

/// Measurement engine (`mesonic-engine`).
///
/// [`engine::CorrelatorPipeline`] turns two masses and a smearing into a
/// 4096-entry [`engine::CorrelatorSet`].
pub use mesonic_engine as engine;

/// Common imports for typical Mesonic usage.
///
/// ```rust
/// use mesonic::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use mesonic_core::{
        Complex64, CorrelatorKey, Gamma, InterpolatorChannel, LabelPair, LatticeShape,
        MesonContractor, Propagator, PropagatorSolver, SmearingKernel, SmearingLabel,
        SmearingParameters, SmearingPlan, SolveRequest, SolverConfig, SpinorField,
    };

    // Errors
    pub use mesonic_core::{ContractionError, MeasurementError, SmearError, SolveError, TensorError};

    // Space and smearing
    pub use mesonic_smear::{JacobiKernel, SinkSmearer};
    pub use mesonic_space::EdgeBehavior;

    // Engine
    pub use mesonic_engine::{
        compute_correlator_set, CorrelatorPipeline, CorrelatorSet, GammaTraceContractor,
        MeasurementConfig,
    };
}
