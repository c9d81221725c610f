//! Shape-checked tensor views over propagator and spinor-field data.
//!
//! A [`Propagator`] is indexed by `(x, y, z, t, spin_out, color_out,
//! spin_in, color_in)`. Fixing `(spin_out, color_out) = (alpha, a)` selects
//! a [`SpinorField`] sub-block over the remaining indices; these blocks are
//! what smearing kernels operate on.

use crate::error::TensorError;
use crate::shape::{LatticeShape, N_COLOR, N_SPIN, SPIN_COLOR};
use crate::Complex64;

/// Complex entries per site of a propagator (a 12×12 spin-color matrix).
pub const SITE_MATRIX: usize = SPIN_COLOR * SPIN_COLOR;

fn check_spin_color(spin: usize, color: usize) -> Result<(), TensorError> {
    if spin >= N_SPIN {
        return Err(TensorError::IndexOutOfRange {
            axis: "spin",
            index: spin,
            extent: N_SPIN,
        });
    }
    if color >= N_COLOR {
        return Err(TensorError::IndexOutOfRange {
            axis: "color",
            index: color,
            extent: N_COLOR,
        });
    }
    Ok(())
}

/// A spinor field: 4 spins × 3 colors per lattice site.
///
/// Site `s` occupies `data[s * 12 .. (s + 1) * 12]` with index
/// `spin * 3 + color` inside the site.
#[derive(Clone, Debug, PartialEq)]
pub struct SpinorField {
    shape: LatticeShape,
    data: Vec<Complex64>,
}

impl SpinorField {
    /// A zero-filled field on `shape`.
    pub fn zeros(shape: LatticeShape) -> Self {
        Self {
            shape,
            data: vec![Complex64::new(0.0, 0.0); shape.volume() * SPIN_COLOR],
        }
    }

    /// Wrap an existing buffer, checking its length against `shape`.
    pub fn from_data(shape: LatticeShape, data: Vec<Complex64>) -> Result<Self, TensorError> {
        let expected = shape.volume() * SPIN_COLOR;
        if data.len() != expected {
            return Err(TensorError::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Lattice shape of this field.
    pub fn shape(&self) -> LatticeShape {
        self.shape
    }

    /// All values in storage order.
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Mutable access to all values in storage order.
    pub fn as_mut_slice(&mut self) -> &mut [Complex64] {
        &mut self.data
    }

    /// The 12 spin-color values at one site.
    pub fn site(&self, site: usize) -> &[Complex64] {
        &self.data[site * SPIN_COLOR..(site + 1) * SPIN_COLOR]
    }

    /// Value at `(site, spin, color)`.
    pub fn get(&self, site: usize, spin: usize, color: usize) -> Complex64 {
        self.data[site * SPIN_COLOR + spin * N_COLOR + color]
    }

    /// Consume the field, returning its buffer.
    pub fn into_data(self) -> Vec<Complex64> {
        self.data
    }
}

/// A quark propagator: a 12×12 spin-color matrix at every lattice site.
///
/// Propagators are produced by an external solver and never mutated by
/// the components that consume them; derived variants are new values.
/// `Clone` is the only way to share one, so no component can observe
/// another's writes.
#[derive(Clone, Debug, PartialEq)]
pub struct Propagator {
    shape: LatticeShape,
    data: Vec<Complex64>,
}

impl Propagator {
    /// Number of `(spin_out, color_out)` sub-blocks.
    pub const BLOCKS: usize = SPIN_COLOR;

    /// A zero-filled propagator on `shape`.
    pub fn zeros(shape: LatticeShape) -> Self {
        Self {
            shape,
            data: vec![Complex64::new(0.0, 0.0); shape.volume() * SITE_MATRIX],
        }
    }

    /// Wrap an existing buffer, checking its length against `shape`.
    pub fn from_data(shape: LatticeShape, data: Vec<Complex64>) -> Result<Self, TensorError> {
        let expected = shape.volume() * SITE_MATRIX;
        if data.len() != expected {
            return Err(TensorError::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Lattice shape of this propagator.
    pub fn shape(&self) -> LatticeShape {
        self.shape
    }

    /// All values in storage order.
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// The 12×12 spin-color matrix at one site, row-major in
    /// `(spin_out * 3 + color_out, spin_in * 3 + color_in)`.
    pub fn site_matrix(&self, site: usize) -> &[Complex64] {
        &self.data[site * SITE_MATRIX..(site + 1) * SITE_MATRIX]
    }

    /// Single element accessor.
    pub fn get(
        &self,
        site: usize,
        spin_out: usize,
        color_out: usize,
        spin_in: usize,
        color_in: usize,
    ) -> Complex64 {
        let row = spin_out * N_COLOR + color_out;
        let col = spin_in * N_COLOR + color_in;
        self.data[site * SITE_MATRIX + row * SPIN_COLOR + col]
    }

    /// Extract the sub-block with `spin_out = alpha` and `color_out = a`.
    ///
    /// Row `(alpha, a)` of every site matrix becomes the 12 spin-color
    /// values of that site in the returned field.
    pub fn block(&self, alpha: usize, a: usize) -> Result<SpinorField, TensorError> {
        check_spin_color(alpha, a)?;
        let row = alpha * N_COLOR + a;
        let mut data = Vec::with_capacity(self.shape.volume() * SPIN_COLOR);
        for site in 0..self.shape.volume() {
            let start = site * SITE_MATRIX + row * SPIN_COLOR;
            data.extend_from_slice(&self.data[start..start + SPIN_COLOR]);
        }
        Ok(SpinorField {
            shape: self.shape,
            data,
        })
    }

    /// Overwrite the sub-block with `spin_out = alpha` and `color_out = a`.
    ///
    /// Returns `Err(TensorError::ShapeMismatch)` if `block` was built on a
    /// different lattice, or `BufferLength` if its buffer is malformed.
    pub fn set_block(
        &mut self,
        alpha: usize,
        a: usize,
        block: &SpinorField,
    ) -> Result<(), TensorError> {
        check_spin_color(alpha, a)?;
        if block.shape != self.shape {
            return Err(TensorError::ShapeMismatch {
                expected: self.shape,
                actual: block.shape,
            });
        }
        let expected = self.shape.volume() * SPIN_COLOR;
        if block.data.len() != expected {
            return Err(TensorError::BufferLength {
                expected,
                actual: block.data.len(),
            });
        }
        let row = alpha * N_COLOR + a;
        for (site, values) in block.data.chunks_exact(SPIN_COLOR).enumerate() {
            let start = site * SITE_MATRIX + row * SPIN_COLOR;
            self.data[start..start + SPIN_COLOR].copy_from_slice(values);
        }
        Ok(())
    }

    /// Iterate over the `(alpha, a)` coordinates of all 12 sub-blocks.
    pub fn block_indices() -> impl Iterator<Item = (usize, usize)> {
        (0..N_SPIN).flat_map(|alpha| (0..N_COLOR).map(move |a| (alpha, a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(shape: LatticeShape) -> Propagator {
        let data = (0..shape.volume() * SITE_MATRIX)
            .map(|i| Complex64::new(i as f64, -(i as f64)))
            .collect();
        Propagator::from_data(shape, data).unwrap()
    }

    #[test]
    fn from_data_rejects_wrong_length() {
        let shape = LatticeShape::cubic(2, 2).unwrap();
        let err = Propagator::from_data(shape, vec![Complex64::new(0.0, 0.0); 10]).unwrap_err();
        assert_eq!(
            err,
            TensorError::BufferLength {
                expected: 16 * 144,
                actual: 10
            }
        );
    }

    #[test]
    fn block_selects_fixed_out_indices() {
        let shape = LatticeShape::cubic(2, 2).unwrap();
        let prop = numbered(shape);
        let block = prop.block(2, 1).unwrap();
        assert_eq!(block.shape(), shape);
        for site in 0..shape.volume() {
            for spin in 0..N_SPIN {
                for color in 0..N_COLOR {
                    assert_eq!(block.get(site, spin, color), prop.get(site, 2, 1, spin, color));
                }
            }
        }
    }

    #[test]
    fn set_block_round_trips_every_block() {
        let shape = LatticeShape::cubic(2, 3).unwrap();
        let prop = numbered(shape);
        let mut rebuilt = Propagator::zeros(shape);
        for (alpha, a) in Propagator::block_indices() {
            rebuilt.set_block(alpha, a, &prop.block(alpha, a).unwrap()).unwrap();
        }
        assert_eq!(rebuilt, prop);
    }

    #[test]
    fn set_block_touches_only_its_rows() {
        let shape = LatticeShape::cubic(1, 2).unwrap();
        let mut prop = Propagator::zeros(shape);
        let mut block = SpinorField::zeros(shape);
        block.as_mut_slice().fill(Complex64::new(1.0, 0.0));
        prop.set_block(3, 2, &block).unwrap();
        for site in 0..shape.volume() {
            for (alpha, a) in Propagator::block_indices() {
                let expected = if (alpha, a) == (3, 2) { 1.0 } else { 0.0 };
                assert_eq!(prop.get(site, alpha, a, 0, 0).re, expected);
            }
        }
    }

    #[test]
    fn set_block_rejects_foreign_shape() {
        let shape = LatticeShape::cubic(2, 2).unwrap();
        let other = LatticeShape::cubic(2, 4).unwrap();
        let mut prop = Propagator::zeros(shape);
        let err = prop.set_block(0, 0, &SpinorField::zeros(other)).unwrap_err();
        assert_eq!(
            err,
            TensorError::ShapeMismatch {
                expected: shape,
                actual: other
            }
        );
    }

    #[test]
    fn out_of_range_indices_rejected() {
        let prop = Propagator::zeros(LatticeShape::cubic(1, 1).unwrap());
        assert!(matches!(
            prop.block(4, 0),
            Err(TensorError::IndexOutOfRange { axis: "spin", .. })
        ));
        assert!(matches!(
            prop.block(0, 3),
            Err(TensorError::IndexOutOfRange { axis: "color", .. })
        ));
    }

    #[test]
    fn twelve_block_indices_in_order() {
        let idx: Vec<_> = Propagator::block_indices().collect();
        assert_eq!(idx.len(), Propagator::BLOCKS);
        assert_eq!(idx[0], (0, 0));
        assert_eq!(idx[1], (0, 1));
        assert_eq!(idx[11], (3, 2));
    }

    #[test]
    fn block_site_is_site_matrix_row() {
        let shape = LatticeShape::cubic(2, 2).unwrap();
        let prop = numbered(shape);
        let block = prop.block(2, 1).unwrap();
        let row = 2 * N_COLOR + 1;
        for site in [0, 5, shape.volume() - 1] {
            let expected = &prop.site_matrix(site)[row * SPIN_COLOR..(row + 1) * SPIN_COLOR];
            assert_eq!(block.site(site), expected);
        }
        let data = block.clone().into_data();
        assert_eq!(SpinorField::from_data(shape, data).unwrap(), block);
    }
}
