//! Error types for the Mesonic smearing engine.
//!
//! One enum per subsystem: tensor views, smearing, the external solver,
//! contraction, aggregation, and configuration. [`MeasurementError`] wraps
//! them with the mass and label context of the failing step and is what
//! `compute_correlator_set` returns.

use crate::channel::InterpolatorChannel;
use crate::key::CorrelatorKey;
use crate::shape::LatticeShape;
use crate::smearing::{LabelPair, SmearingLabel};
use thiserror::Error;

/// Errors from propagator and spinor-field tensor views.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TensorError {
    /// A sub-block does not have the shape the target propagator expects.
    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Shape required by the receiving tensor.
        expected: LatticeShape,
        /// Shape of the block that was supplied.
        actual: LatticeShape,
    },
    /// A flat buffer length does not match its declared shape.
    #[error("buffer length {actual} does not match shape (expected {expected})")]
    BufferLength {
        /// Element count implied by the shape.
        expected: usize,
        /// Element count actually supplied.
        actual: usize,
    },
    /// A spin or color index is outside its range.
    #[error("{axis} index {index} out of range (extent {extent})")]
    IndexOutOfRange {
        /// Which axis was indexed (`"spin"`, `"color"`, `"site"`).
        axis: &'static str,
        /// The offending index.
        index: usize,
        /// Number of valid values on this axis.
        extent: usize,
    },
    /// A lattice extent was zero.
    #[error("invalid lattice shape: {reason}")]
    InvalidShape {
        /// What went wrong.
        reason: String,
    },
}

/// Errors from the smearing operator and smearing kernels.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SmearError {
    /// Negative iteration count or non-finite smearing parameter.
    #[error("invalid smearing parameter: {reason}")]
    InvalidSmearingParameter {
        /// Description of the rejected value.
        reason: String,
    },
    /// A kernel returned a block that does not fit back into the propagator.
    #[error("smeared block rejected: {0}")]
    Tensor(#[from] TensorError),
    /// The kernel itself failed.
    #[error("smearing kernel failed: {reason}")]
    KernelFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

/// Errors reported by a `PropagatorSolver` implementation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SolveError {
    /// The inversion did not produce a propagator.
    #[error("solve failed: {reason}")]
    Failed {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// The solver produced a malformed propagator buffer.
    #[error("solver returned malformed propagator: {0}")]
    Shape(#[from] TensorError),
}

/// Errors from the correlator contraction step.
///
/// Every variant indicates a contract violation by the external
/// contraction primitive (a library/version mismatch); none are retried.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ContractionError {
    /// The primitive returned a channel count other than 256.
    #[error("contraction for {labels} returned {actual} channels, expected {expected}")]
    ChannelCount {
        /// Label pair of the propagator pairing being contracted.
        labels: LabelPair,
        /// Required channel count.
        expected: usize,
        /// Channel count actually returned.
        actual: usize,
    },
    /// A correlator's length differs from the lattice temporal extent.
    #[error("correlator {channel} for {labels} has length {actual}, expected {expected}")]
    CorrelatorLength {
        /// Label pair of the pairing.
        labels: LabelPair,
        /// Channel with the wrong length.
        channel: InterpolatorChannel,
        /// Temporal extent of the lattice.
        expected: usize,
        /// Length actually returned.
        actual: usize,
    },
    /// A correlator contains a NaN or infinite value.
    #[error("non-finite value in correlator {channel} for {labels} at t={t}")]
    NonFinite {
        /// Label pair of the pairing.
        labels: LabelPair,
        /// Channel containing the value.
        channel: InterpolatorChannel,
        /// Temporal index of the first offending value.
        t: usize,
    },
    /// The two propagators handed to the primitive live on different lattices.
    #[error("cannot contract propagators on {first} and {second}")]
    ShapeMismatch {
        /// Shape of the first propagator.
        first: LatticeShape,
        /// Shape of the second propagator.
        second: LatticeShape,
    },
    /// The primitive failed for another reason.
    #[error("contraction failed: {reason}")]
    Failed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

/// Errors from merging per-pair correlators into a `CorrelatorSet`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AggregateError {
    /// A composite key was inserted twice. Indicates a labelling bug.
    #[error("duplicate correlator key {key}")]
    DuplicateKey {
        /// The colliding key.
        key: CorrelatorKey,
    },
}

/// Errors detected by configuration validation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Solver tolerance is NaN, infinite, zero, or negative.
    #[error("solver tolerance must be finite and positive, got {value}")]
    InvalidTolerance {
        /// The rejected tolerance.
        value: f64,
    },
    /// Lattice spacing is NaN, infinite, zero, or negative.
    #[error("lattice spacing must be finite and positive, got {value}")]
    InvalidSpacing {
        /// The rejected spacing.
        value: f64,
    },
    /// Solver iteration cap is zero.
    #[error("max_iterations must be at least 1")]
    ZeroIterations,
    /// The source site does not lie on the lattice.
    #[error("source site {site:?} lies outside {shape}")]
    SourceOffLattice {
        /// The configured source site `[x, y, z, t]`.
        site: [usize; 4],
        /// Shape of the lattice the solve targets.
        shape: LatticeShape,
    },
}

/// Errors returned by the correlator measurement pipeline.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum MeasurementError {
    /// Configuration validation failed before any solve.
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    /// The external solver failed for one mass and variant.
    #[error("solve for mass {mass} ({label}) failed: {source}")]
    Solve {
        /// Quark mass being solved for.
        mass: f64,
        /// Variant that was being produced.
        label: SmearingLabel,
        /// The solver's error.
        #[source]
        source: SolveError,
    },
    /// Sink smearing failed for one mass and variant.
    #[error("sink smearing for mass {mass} ({label}) failed: {source}")]
    Smear {
        /// Quark mass whose propagator was being smeared.
        mass: f64,
        /// Variant that was being produced.
        label: SmearingLabel,
        /// The smearing error.
        #[source]
        source: SmearError,
    },
    /// The smearing parameters themselves were rejected.
    #[error("smearing parameters rejected: {0}")]
    Parameters(#[from] SmearError),
    /// Correlator contraction failed.
    #[error("contraction: {0}")]
    Contraction(#[from] ContractionError),
    /// Result aggregation detected a key collision.
    #[error("aggregation: {0}")]
    Aggregate(#[from] AggregateError),
}
