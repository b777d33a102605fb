use std::collections::HashMap;

use serde::Serialize;

use crate::models::StatKey;

/// One row of a finalized histogram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatEntry {
    pub key: StatKey,
    pub count: u64,
}

/// An accumulative key-to-count mapping with a commutative merge.
///
/// A histogram is created empty per shard, mutated only by its owning worker,
/// merged once into the cumulative histogram at fan-in, and then discarded.
/// No ordering is maintained while building; ordering is applied once in
/// [`Histogram::into_sorted_entries`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Histogram {
    counts: HashMap<StatKey, u64>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `key`, creating the entry at zero if absent
    pub fn increment(&mut self, key: StatKey) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Fold `other` into `self`, adding counts key by key.
    ///
    /// Merging is commutative and associative, which is what makes the
    /// cumulative result independent of shard processing order.
    pub fn merge(&mut self, other: Histogram) {
        for (key, count) in other.counts {
            *self.counts.entry(key).or_insert(0) += count;
        }
    }

    pub fn count(&self, key: &StatKey) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StatKey, u64)> {
        self.counts.iter().map(|(key, &count)| (key, count))
    }

    /// Finalize into an ordered sequence: count descending, then ascending by
    /// key so that ties are deterministic rather than an accident of map
    /// iteration order.
    pub fn into_sorted_entries(self) -> Vec<StatEntry> {
        let mut entries: Vec<StatEntry> =
            self.counts.into_iter().map(|(key, count)| StatEntry { key, count }).collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
        entries
    }
}
