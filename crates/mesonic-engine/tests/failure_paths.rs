//! Integration test: error propagation through the measurement pipeline.
//!
//! Every failure is fatal to the measurement and carries enough context to
//! identify the failing mass, variant, or pairing.

use mesonic_core::{
    ContractionError, LatticeShape, MeasurementError, SmearError, SmearingLabel,
    SmearingParameters, TensorError,
};
use mesonic_engine::{CorrelatorPipeline, MeasurementConfig};
use mesonic_smear::JacobiKernel;
use mesonic_test_utils::{FailingSolver, MockContractor, SeededSolver, ShapeBreakingKernel};

fn shape() -> LatticeShape {
    LatticeShape::cubic(2, 4).unwrap()
}

fn smearing() -> SmearingParameters {
    SmearingParameters::new(2, 0.4).unwrap()
}

#[test]
fn short_contraction_output_is_channel_count_error() {
    let pipeline = CorrelatorPipeline::new(
        SeededSolver::new(shape()),
        JacobiKernel::periodic(),
        MockContractor::new().with_channel_count(200),
        MeasurementConfig::default(),
    );
    let err = pipeline
        .compute_correlator_set(0.4, 0.03, smearing())
        .unwrap_err();
    match err {
        MeasurementError::Contraction(ContractionError::ChannelCount {
            labels,
            expected,
            actual,
        }) => {
            assert_eq!(labels.code(), "LLLL");
            assert_eq!(expected, 256);
            assert_eq!(actual, 200);
        }
        other => panic!("expected ChannelCount, got {other:?}"),
    }
    assert_eq!(pipeline.contractor().calls(), 1);
}

#[test]
fn second_mass_solve_failure_names_mass() {
    // Mass 1 needs two solves; the third call fails.
    let pipeline = CorrelatorPipeline::new(
        FailingSolver::new(shape(), 2),
        JacobiKernel::periodic(),
        MockContractor::new(),
        MeasurementConfig::default(),
    );
    let err = pipeline
        .compute_correlator_set(0.4, 0.03, smearing())
        .unwrap_err();
    match err {
        MeasurementError::Solve { mass, label, .. } => {
            assert_eq!(mass, 0.03);
            assert_eq!(label, SmearingLabel::LL);
        }
        other => panic!("expected Solve, got {other:?}"),
    }
    assert_eq!(pipeline.contractor().calls(), 0);
}

#[test]
fn shape_breaking_kernel_aborts_measurement() {
    let pipeline = CorrelatorPipeline::new(
        SeededSolver::new(shape()),
        ShapeBreakingKernel,
        MockContractor::new(),
        MeasurementConfig::default(),
    );
    let err = pipeline
        .compute_correlator_set(0.4, 0.03, smearing())
        .unwrap_err();
    assert!(matches!(
        err,
        MeasurementError::Smear {
            source: SmearError::Tensor(TensorError::ShapeMismatch { .. }),
            ..
        }
    ));
}

#[test]
fn non_finite_correlator_rejected_when_enabled() {
    let contractor = MockContractor::new().with_nan_at(3);
    let pipeline = CorrelatorPipeline::new(
        SeededSolver::new(shape()),
        JacobiKernel::periodic(),
        &contractor,
        MeasurementConfig::default(),
    );
    let err = pipeline
        .compute_correlator_set(0.4, 0.03, smearing())
        .unwrap_err();
    assert!(matches!(
        err,
        MeasurementError::Contraction(ContractionError::NonFinite { t: 3, .. })
    ));

    let lenient = CorrelatorPipeline::new(
        SeededSolver::new(shape()),
        JacobiKernel::periodic(),
        &contractor,
        MeasurementConfig {
            check_finite: false,
            ..MeasurementConfig::default()
        },
    );
    let set = lenient
        .compute_correlator_set(0.4, 0.03, smearing())
        .unwrap();
    assert_eq!(set.len(), 4096);
}

#[test]
fn errors_render_context() {
    let pipeline = CorrelatorPipeline::new(
        FailingSolver::new(shape(), 0),
        JacobiKernel::periodic(),
        MockContractor::new(),
        MeasurementConfig::default(),
    );
    let err = pipeline
        .compute_correlator_set(0.4, 0.03, smearing())
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("0.4"), "{msg}");
    assert!(msg.contains("LL"), "{msg}");
    assert!(std::error::Error::source(&err).is_some());
}
