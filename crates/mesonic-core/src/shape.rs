//! Lattice extents and site linearisation.

use crate::error::TensorError;
use std::fmt;

/// Number of Dirac spin components.
pub const N_SPIN: usize = 4;
/// Number of color components (SU(3)).
pub const N_COLOR: usize = 3;
/// Spin × color components per site of a spinor field.
pub const SPIN_COLOR: usize = N_SPIN * N_COLOR;

/// Spacetime extents of a 4D lattice: `[nx, ny, nz]` spatial plus `nt`.
///
/// Sites are linearised with `t` slowest, then `x`, `y`, and `z` fastest:
///
/// ```text
/// site = t*NxNyNz + x*NyNz + y*Nz + z
/// ```
///
/// # Examples
///
/// ```
/// use mesonic_core::LatticeShape;
///
/// let shape = LatticeShape::cubic(4, 8).unwrap();
/// assert_eq!(shape.volume(), 512);
/// assert_eq!(shape.site_coords(shape.site_index([1, 2, 3, 5])), [1, 2, 3, 5]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LatticeShape {
    spatial: [usize; 3],
    nt: usize,
}

impl LatticeShape {
    /// Create a shape with explicit spatial extents and temporal extent.
    ///
    /// Returns `Err(TensorError::InvalidShape)` if any extent is zero.
    pub fn new(spatial: [usize; 3], nt: usize) -> Result<Self, TensorError> {
        if let Some(axis) = spatial.iter().position(|&n| n == 0) {
            return Err(TensorError::InvalidShape {
                reason: format!("spatial extent on axis {axis} is zero"),
            });
        }
        if nt == 0 {
            return Err(TensorError::InvalidShape {
                reason: "temporal extent is zero".into(),
            });
        }
        Ok(Self { spatial, nt })
    }

    /// Create an `n³ × nt` lattice.
    pub fn cubic(n: usize, nt: usize) -> Result<Self, TensorError> {
        Self::new([n, n, n], nt)
    }

    /// Spatial extents `[nx, ny, nz]`.
    pub fn spatial(&self) -> [usize; 3] {
        self.spatial
    }

    /// Temporal extent.
    pub fn nt(&self) -> usize {
        self.nt
    }

    /// Number of sites on one time slice.
    pub fn spatial_volume(&self) -> usize {
        self.spatial[0] * self.spatial[1] * self.spatial[2]
    }

    /// Total number of lattice sites.
    pub fn volume(&self) -> usize {
        self.spatial_volume() * self.nt
    }

    /// Convert `[x, y, z, t]` to a linear site index.
    ///
    /// Coordinates are not bounds-checked; see [`contains`](Self::contains).
    pub fn site_index(&self, x: [usize; 4]) -> usize {
        let [_, ny, nz] = self.spatial;
        x[3] * self.spatial_volume() + x[0] * (ny * nz) + x[1] * nz + x[2]
    }

    /// Convert a linear site index back to `[x, y, z, t]`.
    pub fn site_coords(&self, idx: usize) -> [usize; 4] {
        let [_, ny, nz] = self.spatial;
        let t = idx / self.spatial_volume();
        let rem = idx % self.spatial_volume();
        let x = rem / (ny * nz);
        let rem = rem % (ny * nz);
        [x, rem / nz, rem % nz, t]
    }

    /// Whether `[x, y, z, t]` lies on this lattice.
    pub fn contains(&self, x: [usize; 4]) -> bool {
        x[0] < self.spatial[0] && x[1] < self.spatial[1] && x[2] < self.spatial[2] && x[3] < self.nt
    }
}

impl fmt::Display for LatticeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [nx, ny, nz] = self.spatial;
        write!(f, "{nx}x{ny}x{nz}x{}", self.nt)
    }
}
