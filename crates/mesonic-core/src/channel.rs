//! The 16 Dirac gamma structures and the 256 meson interpolator channels.
//!
//! Euclidean Dirac basis with Hermitian gammas, `γ0` the temporal direction:
//!
//! ```text
//! γ0 = diag(1, 1, -1, -1)      γk = [[0, -iσk], [iσk, 0]]
//! γ5 = γ0 γ1 γ2 γ3
//! ```

use crate::Complex64;
use std::fmt;

/// 4×4 complex matrix acting on Dirac spin indices.
pub type SpinMatrix = [[Complex64; 4]; 4];

const O: Complex64 = Complex64::new(0.0, 0.0);
const R: Complex64 = Complex64::new(1.0, 0.0);
const M: Complex64 = Complex64::new(-1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const J: Complex64 = Complex64::new(0.0, -1.0);

const GAMMA_0: SpinMatrix = [[R, O, O, O], [O, R, O, O], [O, O, M, O], [O, O, O, M]];
const GAMMA_1: SpinMatrix = [[O, O, O, J], [O, O, J, O], [O, I, O, O], [I, O, O, O]];
const GAMMA_2: SpinMatrix = [[O, O, O, M], [O, O, R, O], [O, R, O, O], [M, O, O, O]];
const GAMMA_3: SpinMatrix = [[O, O, J, O], [O, O, O, I], [I, O, O, O], [O, J, O, O]];
const IDENTITY: SpinMatrix = [[R, O, O, O], [O, R, O, O], [O, O, R, O], [O, O, O, R]];

/// Product of two spin matrices.
pub fn spin_matmul(a: &SpinMatrix, b: &SpinMatrix) -> SpinMatrix {
    let mut out = [[O; 4]; 4];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, entry) in row.iter_mut().enumerate() {
            *entry = (0..4).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    out
}

/// One of the 16 elements of the Clifford algebra basis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Gamma {
    /// Identity (scalar).
    One,
    /// γ0 (temporal).
    G0,
    /// γ1.
    G1,
    /// γ2.
    G2,
    /// γ3.
    G3,
    /// γ5 (pseudoscalar).
    G5,
    /// γ0 γ5.
    G0G5,
    /// γ1 γ5.
    G1G5,
    /// γ2 γ5.
    G2G5,
    /// γ3 γ5.
    G3G5,
    /// γ0 γ1.
    G0G1,
    /// γ0 γ2.
    G0G2,
    /// γ0 γ3.
    G0G3,
    /// γ1 γ2.
    G1G2,
    /// γ1 γ3.
    G1G3,
    /// γ2 γ3.
    G2G3,
}

impl Gamma {
    /// Number of basis elements.
    pub const COUNT: usize = 16;

    /// All 16 elements in canonical order.
    pub const ALL: [Self; 16] = [
        Self::One,
        Self::G0,
        Self::G1,
        Self::G2,
        Self::G3,
        Self::G5,
        Self::G0G5,
        Self::G1G5,
        Self::G2G5,
        Self::G3G5,
        Self::G0G1,
        Self::G0G2,
        Self::G0G3,
        Self::G1G2,
        Self::G1G3,
        Self::G2G3,
    ];

    /// Short name, e.g. `"g0g5"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::G0 => "g0",
            Self::G1 => "g1",
            Self::G2 => "g2",
            Self::G3 => "g3",
            Self::G5 => "g5",
            Self::G0G5 => "g0g5",
            Self::G1G5 => "g1g5",
            Self::G2G5 => "g2g5",
            Self::G3G5 => "g3g5",
            Self::G0G1 => "g0g1",
            Self::G0G2 => "g0g2",
            Self::G0G3 => "g0g3",
            Self::G1G2 => "g1g2",
            Self::G1G3 => "g1g3",
            Self::G2G3 => "g2g3",
        }
    }

    /// Position in [`ALL`](Self::ALL).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The 4×4 matrix of this element.
    pub fn matrix(self) -> SpinMatrix {
        let g5 = spin_matmul(&spin_matmul(&GAMMA_0, &GAMMA_1), &spin_matmul(&GAMMA_2, &GAMMA_3));
        match self {
            Self::One => IDENTITY,
            Self::G0 => GAMMA_0,
            Self::G1 => GAMMA_1,
            Self::G2 => GAMMA_2,
            Self::G3 => GAMMA_3,
            Self::G5 => g5,
            Self::G0G5 => spin_matmul(&GAMMA_0, &g5),
            Self::G1G5 => spin_matmul(&GAMMA_1, &g5),
            Self::G2G5 => spin_matmul(&GAMMA_2, &g5),
            Self::G3G5 => spin_matmul(&GAMMA_3, &g5),
            Self::G0G1 => spin_matmul(&GAMMA_0, &GAMMA_1),
            Self::G0G2 => spin_matmul(&GAMMA_0, &GAMMA_2),
            Self::G0G3 => spin_matmul(&GAMMA_0, &GAMMA_3),
            Self::G1G2 => spin_matmul(&GAMMA_1, &GAMMA_2),
            Self::G1G3 => spin_matmul(&GAMMA_1, &GAMMA_3),
            Self::G2G3 => spin_matmul(&GAMMA_2, &GAMMA_3),
        }
    }
}

impl fmt::Display for Gamma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A meson interpolator combination: gamma structure at source and sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InterpolatorChannel {
    /// Gamma structure of the source interpolator.
    pub source: Gamma,
    /// Gamma structure of the sink interpolator.
    pub sink: Gamma,
}

impl InterpolatorChannel {
    /// Number of channels produced by one contraction.
    pub const COUNT: usize = Gamma::COUNT * Gamma::COUNT;

    /// Pair a source and sink structure.
    pub fn new(source: Gamma, sink: Gamma) -> Self {
        Self { source, sink }
    }

    /// All 256 channels, source varying slowest.
    pub fn all() -> impl Iterator<Item = Self> {
        Gamma::ALL
            .into_iter()
            .flat_map(|source| Gamma::ALL.into_iter().map(move |sink| Self { source, sink }))
    }

    /// Position in [`all()`](Self::all).
    pub fn index(self) -> usize {
        self.source.index() * Gamma::COUNT + self.sink.index()
    }
}

impl fmt::Display for InterpolatorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.source, self.sink)
    }
}
