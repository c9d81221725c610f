//! Free-field Jacobi smearing kernel.
//!
//! Each iteration applies `(1 + κH)` to a spinor field, where `H` is the
//! spatial hopping term with unit links:
//!
//! ```text
//! ψ_{k+1}(x) = ψ_k(x) + κ Σ_{j = ±x̂, ±ŷ, ±ẑ} ψ_k(x + j)
//! ```
//!
//! The update is Jacobi-style: every site of iteration `k + 1` is computed
//! from the frozen iteration-`k` field. Time slices are never coupled.

use mesonic_core::{
    Complex64, SmearError, SmearingKernel, SmearingParameters, SpinorField, SPIN_COLOR,
};
use mesonic_space::{EdgeBehavior, SpatialStencil};

/// Reference Jacobi smearing kernel on a lattice with unit gauge links.
///
/// Boundary handling follows the configured [`EdgeBehavior`]; lattice QCD
/// normally uses periodic spatial boundaries ([`JacobiKernel::periodic`]).
///
/// # Examples
///
/// ```
/// use mesonic_core::{Complex64, LatticeShape, SmearingKernel, SmearingParameters, SpinorField};
/// use mesonic_smear::JacobiKernel;
///
/// let shape = LatticeShape::cubic(4, 2).unwrap();
/// let mut field = SpinorField::zeros(shape);
/// field.as_mut_slice().fill(Complex64::new(1.0, 0.0));
///
/// let kernel = JacobiKernel::periodic();
/// let out = kernel.smear(&field, SmearingParameters::new(1, 0.5).unwrap()).unwrap();
/// // A uniform periodic field grows by (1 + 6κ) per iteration.
/// assert!((out.get(0, 0, 0).re - 4.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JacobiKernel {
    edge: EdgeBehavior,
}

impl JacobiKernel {
    /// Create a kernel with the given spatial edge behavior.
    pub fn new(edge: EdgeBehavior) -> Self {
        Self { edge }
    }

    /// Kernel with periodic spatial boundaries.
    pub fn periodic() -> Self {
        Self::new(EdgeBehavior::Wrap)
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }
}

impl Default for JacobiKernel {
    fn default() -> Self {
        Self::periodic()
    }
}

impl SmearingKernel for JacobiKernel {
    fn smear(
        &self,
        field: &SpinorField,
        params: SmearingParameters,
    ) -> Result<SpinorField, SmearError> {
        if params.iterations() == 0 {
            return Ok(field.clone());
        }

        let shape = field.shape();
        let stencil = SpatialStencil::new(shape, self.edge);
        let slice = shape.spatial_volume();
        let kappa = params.parameter();

        let mut current = field.as_slice().to_vec();
        let mut next = vec![Complex64::new(0.0, 0.0); current.len()];

        for _ in 0..params.iterations() {
            for t in 0..shape.nt() {
                for rank in 0..slice {
                    let site = t * slice + rank;
                    let out = &mut next[site * SPIN_COLOR..(site + 1) * SPIN_COLOR];
                    out.copy_from_slice(&current[site * SPIN_COLOR..(site + 1) * SPIN_COLOR]);
                    for &nb in stencil.neighbours(rank) {
                        let base = (t * slice + nb) * SPIN_COLOR;
                        for (k, v) in out.iter_mut().enumerate() {
                            *v += current[base + k] * kappa;
                        }
                    }
                }
            }
            std::mem::swap(&mut current, &mut next);
        }

        Ok(SpinorField::from_data(shape, current)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesonic_core::LatticeShape;

    fn point(shape: LatticeShape, site: usize, spin: usize, color: usize) -> SpinorField {
        let mut field = SpinorField::zeros(shape);
        field.as_mut_slice()[site * SPIN_COLOR + spin * 3 + color] = Complex64::new(1.0, 0.0);
        field
    }

    fn params(n: i64, kappa: f64) -> SmearingParameters {
        SmearingParameters::new(n, kappa).unwrap()
    }

    #[test]
    fn default_kernel_is_periodic() {
        assert_eq!(JacobiKernel::default().edge_behavior(), EdgeBehavior::Wrap);
        assert_eq!(
            JacobiKernel::new(EdgeBehavior::Clamp).edge_behavior(),
            EdgeBehavior::Clamp
        );
    }

    #[test]
    fn zero_iterations_is_identity() {
        let shape = LatticeShape::cubic(3, 2).unwrap();
        let field = point(shape, 5, 1, 2);
        let out = JacobiKernel::periodic().smear(&field, params(0, 0.4)).unwrap();
        assert_eq!(out, field);
    }

    #[test]
    fn uniform_field_scales_by_one_plus_six_kappa() {
        let shape = LatticeShape::cubic(4, 2).unwrap();
        let mut field = SpinorField::zeros(shape);
        field.as_mut_slice().fill(Complex64::new(1.0, -1.0));
        let out = JacobiKernel::periodic().smear(&field, params(2, 0.1)).unwrap();
        let factor = 1.6f64 * 1.6;
        for v in out.as_slice() {
            assert!((v.re - factor).abs() < 1e-12, "re {v}");
            assert!((v.im + factor).abs() < 1e-12, "im {v}");
        }
    }

    #[test]
    fn point_source_spreads_to_spatial_neighbours_only() {
        let shape = LatticeShape::cubic(5, 3).unwrap();
        let centre = shape.site_index([2, 2, 2, 1]);
        let field = point(shape, centre, 0, 0);
        let out = JacobiKernel::periodic().smear(&field, params(1, 0.25)).unwrap();

        assert!((out.get(centre, 0, 0).re - 1.0).abs() < 1e-12);
        let neighbours = [
            [1, 2, 2, 1],
            [3, 2, 2, 1],
            [2, 1, 2, 1],
            [2, 3, 2, 1],
            [2, 2, 1, 1],
            [2, 2, 3, 1],
        ];
        for nb in neighbours {
            let v = out.get(shape.site_index(nb), 0, 0);
            assert!((v.re - 0.25).abs() < 1e-12, "neighbour {nb:?} got {v}");
        }
        // No temporal hopping.
        for t in [0, 2] {
            assert_eq!(out.get(shape.site_index([2, 2, 2, t]), 0, 0).re, 0.0);
        }
        // Other spin-color components untouched.
        assert_eq!(out.get(centre, 1, 0).re, 0.0);
    }

    #[test]
    fn absorb_corner_has_three_neighbours() {
        let shape = LatticeShape::cubic(3, 1).unwrap();
        let field = point(shape, 0, 0, 0);
        let out = JacobiKernel::new(EdgeBehavior::Absorb)
            .smear(&field, params(1, 0.5))
            .unwrap();
        let total: f64 = out.as_slice().iter().map(|v| v.re).sum();
        assert!((total - (1.0 + 3.0 * 0.5)).abs() < 1e-12, "total {total}");
    }

    #[test]
    fn smeared_field_keeps_shape() {
        let shape = LatticeShape::new([2, 3, 4], 2).unwrap();
        let field = point(shape, 7, 3, 1);
        let out = JacobiKernel::periodic().smear(&field, params(3, 0.4)).unwrap();
        assert_eq!(out.shape(), shape);
        assert_eq!(out.as_slice().len(), field.as_slice().len());
    }
}
