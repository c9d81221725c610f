//! Result aggregator.
//!
//! Merges the 16 per-pair mappings into one [`CorrelatorSet`] keyed by
//! `(channel, label pair)`. A repeated key is a labelling bug: it is
//! reported as [`AggregateError::DuplicateKey`] and never overwritten.

use crate::combinator::PairCorrelators;
use indexmap::map::Entry;
use indexmap::IndexMap;
use mesonic_core::{
    AggregateError, ChannelCorrelators, CorrelatorKey, CorrelatorValue, InterpolatorChannel,
    LabelPair,
};

/// All correlators of one mass pair, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CorrelatorSet {
    entries: IndexMap<CorrelatorKey, CorrelatorValue>,
}

impl CorrelatorSet {
    /// Entry count of a complete set: 16 label pairs × 256 channels.
    pub const CAPACITY: usize = LabelPair::COUNT * InterpolatorChannel::COUNT;

    /// Empty set pre-sized for [`CAPACITY`](Self::CAPACITY) entries.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::with_capacity(Self::CAPACITY),
        }
    }

    /// Insert one correlator.
    pub fn insert(
        &mut self,
        key: CorrelatorKey,
        value: CorrelatorValue,
    ) -> Result<(), AggregateError> {
        match self.entries.entry(key) {
            Entry::Occupied(_) => Err(AggregateError::DuplicateKey { key }),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
        }
    }

    /// Re-key every channel of one pairing by `labels` and insert it.
    pub fn insert_pair(
        &mut self,
        labels: LabelPair,
        correlators: ChannelCorrelators,
    ) -> Result<(), AggregateError> {
        for (channel, value) in correlators {
            self.insert(CorrelatorKey::new(channel, labels), value)?;
        }
        Ok(())
    }

    /// Look up by channel and label pair.
    pub fn get(
        &self,
        channel: InterpolatorChannel,
        labels: LabelPair,
    ) -> Option<&CorrelatorValue> {
        self.entries.get(&CorrelatorKey::new(channel, labels))
    }

    /// Look up by composite key.
    pub fn get_key(&self, key: &CorrelatorKey) -> Option<&CorrelatorValue> {
        self.entries.get(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no correlator has been inserted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, CorrelatorKey, CorrelatorValue> {
        self.entries.iter()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &CorrelatorKey> + '_ {
        self.entries.keys()
    }

    /// Distinct label pairs, in first-seen order.
    pub fn labels(&self) -> Vec<LabelPair> {
        let mut seen: Vec<LabelPair> = Vec::with_capacity(LabelPair::COUNT);
        for key in self.entries.keys() {
            if !seen.contains(&key.labels) {
                seen.push(key.labels);
            }
        }
        seen
    }

    /// All channels recorded for one label pair.
    pub fn by_label(
        &self,
        labels: LabelPair,
    ) -> impl Iterator<Item = (InterpolatorChannel, &CorrelatorValue)> + '_ {
        self.entries
            .iter()
            .filter(move |(key, _)| key.labels == labels)
            .map(|(key, value)| (key.channel, value))
    }

    /// Consume into the underlying ordered map.
    pub fn into_inner(self) -> IndexMap<CorrelatorKey, CorrelatorValue> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a CorrelatorSet {
    type Item = (&'a CorrelatorKey, &'a CorrelatorValue);
    type IntoIter = indexmap::map::Iter<'a, CorrelatorKey, CorrelatorValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Merge per-pair results into one set.
pub fn aggregate(
    pairs: impl IntoIterator<Item = PairCorrelators>,
) -> Result<CorrelatorSet, AggregateError> {
    let mut set = CorrelatorSet::new();
    for pair in pairs {
        set.insert_pair(pair.labels, pair.correlators)?;
    }
    Ok(set)
}
