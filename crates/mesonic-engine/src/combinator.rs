//! Correlator combinator.
//!
//! Contracts every ordered pairing of mass-1 and mass-2 variants, 16 in
//! all, in Cartesian order `(LL, LS, SL, SS) × (LL, LS, SL, SS)`, and checks
//! each contractor result before it reaches the aggregator.

use crate::variants::PropagatorVariants;
use mesonic_core::{
    ChannelCorrelators, ContractionError, InterpolatorChannel, LabelPair, MesonContractor,
};
use tracing::debug;

/// The correlators of one variant pairing.
#[derive(Clone, Debug, PartialEq)]
pub struct PairCorrelators {
    /// Labels of the (mass 1, mass 2) variants.
    pub labels: LabelPair,
    /// One correlator per channel, in contractor order.
    pub correlators: ChannelCorrelators,
}

/// Contract all 16 pairings of `first` with `second`.
///
/// The contractor is invoked exactly once per pairing. Fails on the first
/// pairing whose result does not hold 256 channels, has a correlator whose
/// length differs from the temporal extent, or (with `check_finite`)
/// contains a non-finite value.
pub fn combine<C: MesonContractor>(
    contractor: &C,
    first: &PropagatorVariants,
    second: &PropagatorVariants,
    check_finite: bool,
) -> Result<Vec<PairCorrelators>, ContractionError> {
    if first.shape() != second.shape() {
        return Err(ContractionError::ShapeMismatch {
            first: first.shape(),
            second: second.shape(),
        });
    }
    let nt = first.shape().nt();

    let mut out = Vec::with_capacity(LabelPair::COUNT);
    for labels in LabelPair::all() {
        let correlators = contractor.contract(first.get(labels.first), second.get(labels.second))?;
        check_pair(labels, &correlators, nt, check_finite)?;
        debug!(%labels, channels = correlators.len(), "contracted pair");
        out.push(PairCorrelators {
            labels,
            correlators,
        });
    }
    Ok(out)
}

fn check_pair(
    labels: LabelPair,
    correlators: &ChannelCorrelators,
    nt: usize,
    check_finite: bool,
) -> Result<(), ContractionError> {
    if correlators.len() != InterpolatorChannel::COUNT {
        return Err(ContractionError::ChannelCount {
            labels,
            expected: InterpolatorChannel::COUNT,
            actual: correlators.len(),
        });
    }
    for (&channel, corr) in correlators {
        if corr.len() != nt {
            return Err(ContractionError::CorrelatorLength {
                labels,
                channel,
                expected: nt,
                actual: corr.len(),
            });
        }
        if check_finite {
            if let Some(t) = corr.iter().position(|v| !v.re.is_finite() || !v.im.is_finite()) {
                return Err(ContractionError::NonFinite { labels, channel, t });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesonic_core::{LatticeShape, Propagator, SmearingLabel};
    use mesonic_test_utils::{random_propagator, MockContractor};

    fn variants(shape: LatticeShape, seed: u64) -> PropagatorVariants {
        PropagatorVariants::new(
            random_propagator(shape, seed),
            random_propagator(shape, seed + 1),
            random_propagator(shape, seed + 2),
            random_propagator(shape, seed + 3),
        )
        .unwrap()
    }

    #[test]
    fn sixteen_pairs_in_cartesian_order() {
        let shape = LatticeShape::cubic(2, 3).unwrap();
        let contractor = MockContractor::new();
        let pairs = combine(&contractor, &variants(shape, 0), &variants(shape, 10), true).unwrap();
        assert_eq!(pairs.len(), 16);
        assert_eq!(contractor.calls(), 16);
        let codes: Vec<_> = pairs.iter().map(|p| p.labels.code()).collect();
        assert_eq!(codes[0], "LLLL");
        assert_eq!(codes[1], "LLLS");
        assert_eq!(codes[4], "LSLL");
        assert_eq!(codes[15], "SSSS");
    }

    #[test]
    fn pairing_uses_matching_variants() {
        let shape = LatticeShape::cubic(2, 2).unwrap();
        let first = variants(shape, 0);
        let second = variants(shape, 10);
        let pairs = combine(&MockContractor::new(), &first, &second, true).unwrap();
        let ls_sl = pairs
            .iter()
            .find(|p| p.labels == LabelPair::new(SmearingLabel::LS, SmearingLabel::SL))
            .unwrap();
        let expected = MockContractor::fingerprint(
            first.get(SmearingLabel::LS),
            second.get(SmearingLabel::SL),
        );
        let (_, corr) = ls_sl.correlators.first().unwrap();
        assert_eq!(corr[0].im, expected);
    }

    #[test]
    fn short_channel_count_rejected() {
        let shape = LatticeShape::cubic(2, 2).unwrap();
        let contractor = MockContractor::new().with_channel_count(255);
        let err = combine(&contractor, &variants(shape, 0), &variants(shape, 4), true).unwrap_err();
        assert_eq!(
            err,
            ContractionError::ChannelCount {
                labels: LabelPair::new(SmearingLabel::LL, SmearingLabel::LL),
                expected: 256,
                actual: 255,
            }
        );
        assert_eq!(contractor.calls(), 1);
    }

    #[test]
    fn wrong_length_rejected() {
        let shape = LatticeShape::cubic(2, 3).unwrap();
        let contractor = MockContractor::new().with_length(2);
        let err = combine(&contractor, &variants(shape, 0), &variants(shape, 4), true).unwrap_err();
        assert!(matches!(
            err,
            ContractionError::CorrelatorLength {
                expected: 3,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn nan_rejected_only_when_checking() {
        let shape = LatticeShape::cubic(2, 3).unwrap();
        let contractor = MockContractor::new().with_nan_at(1);
        let err = combine(&contractor, &variants(shape, 0), &variants(shape, 4), true).unwrap_err();
        assert!(matches!(err, ContractionError::NonFinite { t: 1, .. }));

        let pairs = combine(&contractor, &variants(shape, 0), &variants(shape, 4), false).unwrap();
        assert_eq!(pairs.len(), 16);
    }

    #[test]
    fn mismatched_lattices_rejected_before_contracting() {
        let a = LatticeShape::cubic(2, 2).unwrap();
        let b = LatticeShape::cubic(2, 3).unwrap();
        let zeros = |s| {
            PropagatorVariants::new(
                Propagator::zeros(s),
                Propagator::zeros(s),
                Propagator::zeros(s),
                Propagator::zeros(s),
            )
            .unwrap()
        };
        let contractor = MockContractor::new();
        let err = combine(&contractor, &zeros(a), &zeros(b), true).unwrap_err();
        assert!(matches!(err, ContractionError::ShapeMismatch { .. }));
        assert_eq!(contractor.calls(), 0);
    }
}
