//! Correlator measurement engine for Mesonic.
//!
//! Builds the four smearing variants of each quark mass, contracts the 16
//! variant pairings through a [`MesonContractor`](mesonic_core::MesonContractor),
//! and aggregates the 4096 resulting correlators into a [`CorrelatorSet`].
//! The entry point is [`CorrelatorPipeline::compute_correlator_set`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod combinator;
pub mod config;
pub mod contract;
pub mod pipeline;
pub mod variants;

pub use aggregate::{aggregate, CorrelatorSet};
pub use combinator::{combine, PairCorrelators};
pub use config::MeasurementConfig;
pub use contract::GammaTraceContractor;
pub use pipeline::{compute_correlator_set, CorrelatorPipeline};
pub use variants::{build_variants, PropagatorVariants};
