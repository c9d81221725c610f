//! Core types and traits for the Mesonic propagator smearing engine.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! lattice shape, the shape-checked [`Propagator`] and [`SpinorField`]
//! tensor views, smearing labels and parameters, the gamma/channel
//! enumeration, correlator keys, the error taxonomy, and the traits at
//! which the external field theory library plugs in.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod channel;
pub mod error;
pub mod key;
pub mod shape;
pub mod smearing;
pub mod solve;
pub mod tensor;
pub mod traits;

pub use num_complex::Complex64;

pub use channel::{spin_matmul, Gamma, InterpolatorChannel, SpinMatrix};
pub use error::{
    AggregateError, ConfigError, ContractionError, MeasurementError, SmearError, SolveError,
    TensorError,
};
pub use key::{ChannelCorrelators, CorrelatorKey, CorrelatorValue};
pub use shape::{LatticeShape, N_COLOR, N_SPIN, SPIN_COLOR};
pub use smearing::{LabelPair, Smearing, SmearingLabel, SmearingParameters, SmearingPlan};
pub use solve::{SolveRequest, SolverConfig, SolverMethod, Verbosity};
pub use tensor::{Propagator, SpinorField, SITE_MATRIX};
pub use traits::{MesonContractor, PropagatorSolver, SmearingKernel};
