//! Reference gamma-trace meson contractor.
//!
//! For two point-to-all propagators `S₁` (mass 1) and `S₂` (mass 2):
//!
//! ```text
//! C_{Γsrc,Γsnk}(t) = Σ_x Tr[ Γsnk S₁(x,t) Γsrc γ5 S₂(x,t)† γ5 ]
//! ```
//!
//! The trace runs over spin and color. `γ5 S₂† γ5` is the backward
//! propagator from γ5-hermiticity. Conventional overall signs are left to
//! the analysis.

use mesonic_core::{
    ChannelCorrelators, Complex64, ContractionError, Gamma, InterpolatorChannel, MesonContractor,
    Propagator, SpinMatrix, N_COLOR, N_SPIN, SITE_MATRIX, SPIN_COLOR,
};

type SiteMatrix = [Complex64; SITE_MATRIX];

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

#[inline]
fn idx(spin: usize, color: usize) -> usize {
    spin * N_COLOR + color
}

/// Contracts propagators site by site over all 256 channels.
#[derive(Clone, Copy, Debug, Default)]
pub struct GammaTraceContractor;

impl GammaTraceContractor {
    /// Create the contractor.
    pub fn new() -> Self {
        Self
    }
}

impl MesonContractor for GammaTraceContractor {
    fn contract(
        &self,
        first: &Propagator,
        second: &Propagator,
    ) -> Result<ChannelCorrelators, ContractionError> {
        let shape = first.shape();
        if second.shape() != shape {
            return Err(ContractionError::ShapeMismatch {
                first: shape,
                second: second.shape(),
            });
        }

        let gammas: [SpinMatrix; Gamma::COUNT] = Gamma::ALL.map(Gamma::matrix);
        let g5 = Gamma::G5.matrix();
        let slice = shape.spatial_volume();
        let mut acc = vec![vec![ZERO; shape.nt()]; InterpolatorChannel::COUNT];

        for site in 0..shape.volume() {
            let t = site / slice;
            let s1 = first.site_matrix(site);
            let backward = gamma5_dagger(second.site_matrix(site), &g5);
            for (src, gsrc) in gammas.iter().enumerate() {
                let n = spin_left_mul(gsrc, &backward);
                let r = spin_partial_trace(s1, &n);
                for (snk, gsnk) in gammas.iter().enumerate() {
                    let mut tr = ZERO;
                    for (alpha, row) in gsnk.iter().enumerate() {
                        for (beta, g) in row.iter().enumerate() {
                            if *g != ZERO {
                                tr += g * r[beta][alpha];
                            }
                        }
                    }
                    acc[src * Gamma::COUNT + snk][t] += tr;
                }
            }
        }

        Ok(InterpolatorChannel::all().zip(acc).collect())
    }
}

/// `γ5 S† γ5` for one site.
fn gamma5_dagger(s: &[Complex64], g5: &SpinMatrix) -> SiteMatrix {
    let mut out = [ZERO; SITE_MATRIX];
    for s_out in 0..N_SPIN {
        for c_out in 0..N_COLOR {
            for s_in in 0..N_SPIN {
                for c_in in 0..N_COLOR {
                    let mut v = ZERO;
                    for p in 0..N_SPIN {
                        if g5[s_out][p] == ZERO {
                            continue;
                        }
                        for q in 0..N_SPIN {
                            if g5[q][s_in] == ZERO {
                                continue;
                            }
                            let dag = s[idx(q, c_in) * SPIN_COLOR + idx(p, c_out)].conj();
                            v += g5[s_out][p] * dag * g5[q][s_in];
                        }
                    }
                    out[idx(s_out, c_out) * SPIN_COLOR + idx(s_in, c_in)] = v;
                }
            }
        }
    }
    out
}

/// `(Γ ⊗ 1) M` acting on spin rows.
fn spin_left_mul(gamma: &SpinMatrix, m: &SiteMatrix) -> SiteMatrix {
    let mut out = [ZERO; SITE_MATRIX];
    for (g, row) in gamma.iter().enumerate() {
        for (d, coeff) in row.iter().enumerate() {
            if *coeff == ZERO {
                continue;
            }
            for b in 0..N_COLOR {
                let dst = idx(g, b) * SPIN_COLOR;
                let src = idx(d, b) * SPIN_COLOR;
                for k in 0..SPIN_COLOR {
                    out[dst + k] += coeff * m[src + k];
                }
            }
        }
    }
    out
}

/// `R[β][α] = Σ_a Σ_k S[(β,a), k] N[k, (α,a)]`, the color-traced product.
fn spin_partial_trace(s: &[Complex64], n: &SiteMatrix) -> SpinMatrix {
    let mut r = [[ZERO; N_SPIN]; N_SPIN];
    for (beta, row) in r.iter_mut().enumerate() {
        for (alpha, entry) in row.iter_mut().enumerate() {
            let mut v = ZERO;
            for a in 0..N_COLOR {
                let s_row = idx(beta, a) * SPIN_COLOR;
                let col = idx(alpha, a);
                for k in 0..SPIN_COLOR {
                    v += s[s_row + k] * n[k * SPIN_COLOR + col];
                }
            }
            *entry = v;
        }
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesonic_core::LatticeShape;
    use mesonic_test_utils::random_propagator;

    fn unit_propagator(shape: LatticeShape) -> Propagator {
        let mut data = vec![ZERO; shape.volume() * SITE_MATRIX];
        for site in 0..shape.volume() {
            for k in 0..SPIN_COLOR {
                data[site * SITE_MATRIX + k * SPIN_COLOR + k] = Complex64::new(1.0, 0.0);
            }
        }
        Propagator::from_data(shape, data).unwrap()
    }

    #[test]
    fn returns_all_channels_with_nt_entries() {
        let shape = LatticeShape::cubic(2, 3).unwrap();
        let p = random_propagator(shape, 1);
        let out = GammaTraceContractor.contract(&p, &p).unwrap();
        assert_eq!(out.len(), InterpolatorChannel::COUNT);
        for (i, (ch, corr)) in out.iter().enumerate() {
            assert_eq!(ch.index(), i);
            assert_eq!(corr.len(), 3);
        }
    }

    #[test]
    fn pion_is_sum_of_squared_norms() {
        let shape = LatticeShape::cubic(2, 2).unwrap();
        let p = random_propagator(shape, 9);
        let out = GammaTraceContractor.contract(&p, &p).unwrap();
        let pion = &out[&InterpolatorChannel::new(Gamma::G5, Gamma::G5)];
        let slice = shape.spatial_volume();
        for (t, value) in pion.iter().enumerate() {
            let expected: f64 = (t * slice..(t + 1) * slice)
                .flat_map(|site| p.site_matrix(site).iter())
                .map(|v| v.norm_sqr())
                .sum();
            assert!(expected > 0.0);
            assert!((value.re - expected).abs() < 1e-9 * expected, "t={t}: {value} vs {expected}");
            assert!(value.im.abs() < 1e-9 * expected);
        }
    }

    #[test]
    fn unit_propagator_traces_gamma_products() {
        let shape = LatticeShape::cubic(2, 1).unwrap();
        let p = unit_propagator(shape);
        let out = GammaTraceContractor.contract(&p, &p).unwrap();
        let slice = shape.spatial_volume() as f64;
        for (ch, corr) in &out {
            let magnitude = corr[0].norm();
            if ch.source == ch.sink {
                // Tr[Γ Γ] = ±4, times 3 colors.
                assert!((magnitude - 12.0 * slice).abs() < 1e-9, "{ch}: {}", corr[0]);
            } else {
                assert!(magnitude < 1e-9, "{ch}: {}", corr[0]);
            }
        }
    }

    #[test]
    fn mismatched_shapes_rejected() {
        let a = Propagator::zeros(LatticeShape::cubic(2, 2).unwrap());
        let b = Propagator::zeros(LatticeShape::cubic(2, 3).unwrap());
        assert!(matches!(
            GammaTraceContractor.contract(&a, &b),
            Err(ContractionError::ShapeMismatch { .. })
        ));
    }
}
