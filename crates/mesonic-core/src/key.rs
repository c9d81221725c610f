//! Correlator keys and value types.

use crate::channel::InterpolatorChannel;
use crate::smearing::LabelPair;
use crate::Complex64;
use indexmap::IndexMap;
use std::fmt;

/// A meson correlator indexed by temporal separation.
///
/// Length equals the lattice temporal extent.
pub type CorrelatorValue = Vec<Complex64>;

/// Output of one contraction: one correlator per interpolator channel,
/// in the order the contractor produced them.
pub type ChannelCorrelators = IndexMap<InterpolatorChannel, CorrelatorValue>;

/// Composite key of an aggregated correlator: channel plus smearing labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CorrelatorKey {
    /// Interpolator channel.
    pub channel: InterpolatorChannel,
    /// Smearing labels of the (mass 1, mass 2) propagators.
    pub labels: LabelPair,
}

impl CorrelatorKey {
    /// Build a key.
    pub fn new(channel: InterpolatorChannel, labels: LabelPair) -> Self {
        Self { channel, labels }
    }
}

impl fmt::Display for CorrelatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.channel, self.labels)
    }
}
