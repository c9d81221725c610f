//! Jacobi smearing for Mesonic propagators.
//!
//! - [`JacobiKernel`]: reference free-field smearing kernel over spinor
//!   sub-blocks, with configurable spatial edge behavior.
//! - [`SinkSmearer`]: the smearing operator, looping a kernel over the 12
//!   spin-color sub-blocks of a propagator.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod jacobi;
pub mod sink;

pub use jacobi::JacobiKernel;
pub use sink::{smear_propagator, SinkSmearer};
