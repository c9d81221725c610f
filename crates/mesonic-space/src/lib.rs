//! Spatial stencils for Mesonic lattices.
//!
//! Smearing acts on the three spatial axes of each time slice
//! independently. This crate provides the [`EdgeBehavior`] that decides
//! what happens at the lattice edge and the precomputed six-connected
//! [`SpatialStencil`] smearing kernels iterate over.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod stencil;

pub use edge::EdgeBehavior;
pub use stencil::{resolve_axis, Neighbours, SpatialStencil};
