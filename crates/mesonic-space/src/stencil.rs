//! Six-connected nearest-neighbour stencil over the spatial sites of a
//! time slice.

use crate::edge::EdgeBehavior;
use mesonic_core::LatticeShape;
use smallvec::SmallVec;

/// Neighbour list of one spatial site: at most `±x, ±y, ±z`.
pub type Neighbours = SmallVec<[usize; 6]>;

/// Resolve a single axis value under the given edge behavior.
///
/// Returns `Some(resolved)` or `None` for an Absorb out-of-bounds value.
pub fn resolve_axis(val: i64, len: usize, edge: EdgeBehavior) -> Option<usize> {
    let n = len as i64;
    if val >= 0 && val < n {
        return Some(val as usize);
    }
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Clamp => Some(val.clamp(0, n - 1) as usize),
        EdgeBehavior::Wrap => Some((((val % n) + n) % n) as usize),
    }
}

/// Precomputed neighbour table for the spatial sites of one time slice.
///
/// Spatial sites are ranked `x*NyNz + y*Nz + z`, matching the in-slice
/// part of [`LatticeShape::site_index`]. The full index of a neighbour on
/// time slice `t` is `t * spatial_volume + rank`.
#[derive(Clone, Debug)]
pub struct SpatialStencil {
    shape: LatticeShape,
    edge: EdgeBehavior,
    table: Vec<Neighbours>,
}

impl SpatialStencil {
    /// Build the neighbour table for `shape` under `edge`.
    pub fn new(shape: LatticeShape, edge: EdgeBehavior) -> Self {
        let [nx, ny, nz] = shape.spatial();
        let offsets: [(i64, i64, i64); 6] = [
            (-1, 0, 0),
            (1, 0, 0),
            (0, -1, 0),
            (0, 1, 0),
            (0, 0, -1),
            (0, 0, 1),
        ];
        let mut table = Vec::with_capacity(shape.spatial_volume());
        for x in 0..nx as i64 {
            for y in 0..ny as i64 {
                for z in 0..nz as i64 {
                    let mut nbs = Neighbours::new();
                    for (dx, dy, dz) in offsets {
                        let rx = resolve_axis(x + dx, nx, edge);
                        let ry = resolve_axis(y + dy, ny, edge);
                        let rz = resolve_axis(z + dz, nz, edge);
                        if let (Some(rx), Some(ry), Some(rz)) = (rx, ry, rz) {
                            nbs.push(rx * ny * nz + ry * nz + rz);
                        }
                    }
                    table.push(nbs);
                }
            }
        }
        Self { shape, edge, table }
    }

    /// Lattice shape the table was built for.
    pub fn shape(&self) -> LatticeShape {
        self.shape
    }

    /// Edge behavior the table was built with.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Neighbour ranks of the spatial site with rank `rank`.
    pub fn neighbours(&self, rank: usize) -> &[usize] {
        &self.table[rank]
    }

    /// Number of spatial sites covered.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always `false`: lattice shapes have at least one site.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
