//! Mock meson contractor.

use indexmap::IndexMap;
use mesonic_core::{
    ChannelCorrelators, Complex64, ContractionError, InterpolatorChannel, MesonContractor,
    Propagator,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Produces synthetic correlators and counts calls.
///
/// By default returns all 256 channels, each of length `nt`. The value at
/// `t` of channel `c` is `c.index() + t` in the real part and a
/// fingerprint of the two propagators in the imaginary part, so output
/// from different pairings can be told apart.
///
/// The builder methods break the contractor contract in controlled ways.
pub struct MockContractor {
    channel_count: usize,
    length: Option<usize>,
    nan_at: Option<usize>,
    calls: AtomicUsize,
}

impl MockContractor {
    pub fn new() -> Self {
        Self {
            channel_count: InterpolatorChannel::COUNT,
            length: None,
            nan_at: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Emit only the first `count` channels (at most 256).
    pub fn with_channel_count(mut self, count: usize) -> Self {
        self.channel_count = count;
        self
    }

    /// Emit correlators of `len` entries instead of `nt`.
    pub fn with_length(mut self, len: usize) -> Self {
        self.length = Some(len);
        self
    }

    /// Put a NaN at time slice `t` of the first channel.
    pub fn with_nan_at(mut self, t: usize) -> Self {
        self.nan_at = Some(t);
        self
    }

    /// How many times `contract()` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// Imaginary-part fingerprint used for a pairing.
    pub fn fingerprint(first: &Propagator, second: &Propagator) -> f64 {
        let head = |p: &Propagator| p.as_slice().first().map_or(0.0, |v| v.re);
        head(first) + 10.0 * head(second)
    }
}

impl Default for MockContractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MesonContractor for MockContractor {
    fn contract(
        &self,
        first: &Propagator,
        second: &Propagator,
    ) -> Result<ChannelCorrelators, ContractionError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let len = self.length.unwrap_or_else(|| first.shape().nt());
        let tag = Self::fingerprint(first, second);
        let mut out = IndexMap::with_capacity(self.channel_count);
        for (i, channel) in InterpolatorChannel::all().take(self.channel_count).enumerate() {
            let mut corr: Vec<Complex64> = (0..len)
                .map(|t| Complex64::new((channel.index() + t) as f64, tag))
                .collect();
            if i == 0 {
                if let Some(slot) = self.nan_at.and_then(|t| corr.get_mut(t)) {
                    *slot = Complex64::new(f64::NAN, 0.0);
                }
            }
            out.insert(channel, corr);
        }
        Ok(out)
    }
}
