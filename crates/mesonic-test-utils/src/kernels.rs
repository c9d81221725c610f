//! Mock smearing kernels.

use mesonic_core::{LatticeShape, SmearError, SmearingKernel, SmearingParameters, SpinorField};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns its input unchanged and counts calls.
#[derive(Default)]
pub struct CopyKernel {
    calls: AtomicUsize,
}

impl CopyKernel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sub-blocks smeared so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl SmearingKernel for CopyKernel {
    fn smear(
        &self,
        field: &SpinorField,
        _params: SmearingParameters,
    ) -> Result<SpinorField, SmearError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(field.clone())
    }
}

/// Returns a zero field on a lattice with one extra time slice.
///
/// Violates the kernel shape contract on purpose.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShapeBreakingKernel;

impl SmearingKernel for ShapeBreakingKernel {
    fn smear(
        &self,
        field: &SpinorField,
        _params: SmearingParameters,
    ) -> Result<SpinorField, SmearError> {
        let shape = field.shape();
        let wrong = LatticeShape::new(shape.spatial(), shape.nt() + 1)?;
        Ok(SpinorField::zeros(wrong))
    }
}

/// Always fails with `SmearError::KernelFailed`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingKernel;

impl SmearingKernel for FailingKernel {
    fn smear(
        &self,
        _field: &SpinorField,
        _params: SmearingParameters,
    ) -> Result<SpinorField, SmearError> {
        Err(SmearError::KernelFailed {
            reason: "gauge links unavailable".into(),
        })
    }
}
