//! The sink smearing operator.
//!
//! Applies a [`SmearingKernel`] independently to each of the 12
//! `(spin_out, color_out)` sub-blocks of a propagator and assembles the
//! results into a new propagator. The input is only ever borrowed.

use mesonic_core::{Propagator, SmearError, SmearingKernel, SmearingParameters};
use tracing::{debug, warn};

/// Smears propagators at the sink through a [`SmearingKernel`].
#[derive(Clone, Debug, Default)]
pub struct SinkSmearer<K> {
    kernel: K,
}

impl<K: SmearingKernel> SinkSmearer<K> {
    /// Wrap a smearing kernel.
    pub fn new(kernel: K) -> Self {
        Self { kernel }
    }

    /// The wrapped kernel.
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Smear all 12 sub-blocks of `prop`.
    ///
    /// Zero iterations returns an equal copy without invoking the kernel.
    /// Returns `Err(SmearError::Tensor)` if the kernel hands back a block
    /// of the wrong shape.
    pub fn smear(
        &self,
        prop: &Propagator,
        params: SmearingParameters,
    ) -> Result<Propagator, SmearError> {
        if params.iterations() == 0 {
            return Ok(prop.clone());
        }
        if !params.is_typical() {
            warn!(
                parameter = params.parameter(),
                "smearing parameter outside the usual (0, 1] range"
            );
        }

        let mut out = Propagator::zeros(prop.shape());
        for (alpha, a) in Propagator::block_indices() {
            let block = prop.block(alpha, a)?;
            let smeared = self.kernel.smear(&block, params)?;
            out.set_block(alpha, a, &smeared)?;
        }
        debug!(
            shape = %prop.shape(),
            iterations = params.iterations(),
            parameter = params.parameter(),
            "sink-smeared propagator"
        );
        Ok(out)
    }

    /// [`smear`](Self::smear) with an unchecked iteration count.
    ///
    /// Returns `Err(SmearError::InvalidSmearingParameter)` if `n_smears`
    /// is negative.
    pub fn smear_with(
        &self,
        prop: &Propagator,
        n_smears: i64,
        parameter: f64,
    ) -> Result<Propagator, SmearError> {
        let params = SmearingParameters::new(n_smears, parameter)?;
        self.smear(prop, params)
    }
}

/// Smear `prop` at the sink with `kernel`, `n_smears` times.
pub fn smear_propagator<K: SmearingKernel>(
    kernel: &K,
    prop: &Propagator,
    n_smears: i64,
    parameter: f64,
) -> Result<Propagator, SmearError> {
    SinkSmearer::new(kernel).smear_with(prop, n_smears, parameter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JacobiKernel;
    use mesonic_core::{Complex64, LatticeShape};

    fn ramp(shape: LatticeShape) -> Propagator {
        let data = (0..shape.volume() * mesonic_core::SITE_MATRIX)
            .map(|i| Complex64::new((i % 7) as f64, (i % 5) as f64))
            .collect();
        Propagator::from_data(shape, data).unwrap()
    }

    #[test]
    fn negative_iterations_rejected() {
        let prop = ramp(LatticeShape::cubic(2, 2).unwrap());
        let err = smear_propagator(&JacobiKernel::periodic(), &prop, -1, 0.4).unwrap_err();
        assert!(matches!(err, SmearError::InvalidSmearingParameter { .. }));
    }

    #[test]
    fn zero_iterations_returns_equal_copy() {
        let prop = ramp(LatticeShape::cubic(2, 2).unwrap());
        let out = smear_propagator(&JacobiKernel::periodic(), &prop, 0, 0.4).unwrap();
        assert_eq!(out, prop);
        assert_ne!(out.as_slice().as_ptr(), prop.as_slice().as_ptr());
    }

    #[test]
    fn every_block_is_smeared_like_its_spinor() {
        let shape = LatticeShape::cubic(3, 2).unwrap();
        let prop = ramp(shape);
        let kernel = JacobiKernel::periodic();
        let params = SmearingParameters::new(2, 0.4).unwrap();
        let out = SinkSmearer::new(kernel).smear(&prop, params).unwrap();
        for (alpha, a) in Propagator::block_indices() {
            let expected = kernel.smear(&prop.block(alpha, a).unwrap(), params).unwrap();
            assert_eq!(out.block(alpha, a).unwrap(), expected);
        }
    }

    #[test]
    fn input_is_not_mutated() {
        let prop = ramp(LatticeShape::cubic(2, 2).unwrap());
        let before = prop.clone();
        let _ = smear_propagator(&JacobiKernel::periodic(), &prop, 3, 0.4).unwrap();
        assert_eq!(prop, before);
    }
}
