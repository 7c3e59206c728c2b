//! Explicit counter map
//!
//! A [`Tally`] counts occurrences per key. A missing key reads as zero; no
//! entry is created by reading. Merging two tallies is pointwise addition,
//! with the empty tally as identity.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Counter map with missing-key-reads-as-zero semantics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tally<K: Eq + Hash>(FxHashMap<K, u64>);

impl<K: Eq + Hash> Default for Tally<K> {
    fn default() -> Self {
        Self(FxHashMap::default())
    }
}

impl<K: Eq + Hash> Tally<K> {
    /// Empty tally
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for a key; zero when the key was never counted
    #[must_use]
    pub fn get(&self, key: &K) -> u64 {
        self.0.get(key).copied().unwrap_or(0)
    }

    /// Add to a key's count
    pub fn add(&mut self, key: K, n: u64) {
        *self.0.entry(key).or_insert(0) += n;
    }

    /// Add one to a key's count
    pub fn increment(&mut self, key: K) {
        self.add(key, 1);
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Number of distinct keys counted
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.0.len()
    }

    /// True when nothing was counted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pointwise addition of another tally into this one
    pub fn merge(&mut self, other: &Self)
    where
        K: Clone,
    {
        for (key, &count) in &other.0 {
            self.add(key.clone(), count);
        }
    }

    /// The `n` highest counts, largest first
    ///
    /// Ties break on key order so the result is deterministic.
    #[must_use]
    pub fn most_common(&self, n: usize) -> Vec<(K, u64)>
    where
        K: Clone + Ord,
    {
        let mut entries: Vec<(K, u64)> = self
            .0
            .iter()
            .map(|(key, &count)| (key.clone(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }
}

impl<K: Eq + Hash> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Self::new();
        for key in iter {
            tally.increment(key);
        }
        tally
    }
}
