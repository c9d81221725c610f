//! Spatial edge (boundary) behavior of the smearing stencil.

/// How the spatial stencil treats neighbours beyond the lattice edge.
///
/// Only the three spatial axes are affected; smearing never couples
/// different time slices.
///
/// # Examples
///
/// ```
/// use mesonic_core::LatticeShape;
/// use mesonic_space::{EdgeBehavior, SpatialStencil};
///
/// let shape = LatticeShape::cubic(4, 1).unwrap();
///
/// // Wrap: every site has six neighbours (3-torus).
/// let wrap = SpatialStencil::new(shape, EdgeBehavior::Wrap);
/// assert_eq!(wrap.neighbours(0).len(), 6);
///
/// // Absorb: the corner site only has three.
/// let absorb = SpatialStencil::new(shape, EdgeBehavior::Absorb);
/// assert_eq!(absorb.neighbours(0).len(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour maps to the boundary site (self-loop).
    Clamp,
    /// Out-of-bounds neighbour wraps to the opposite side (periodic).
    Wrap,
    /// Out-of-bounds neighbour is omitted (fewer neighbours at edges).
    Absorb,
}
