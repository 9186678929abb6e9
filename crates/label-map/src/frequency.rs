//! First-pass occurrence counts of normalized fiber names.

use std::collections::BTreeMap;

/// Occurrence counts keyed by normalized name, iterated in first-seen order.
///
/// Merging is commutative and associative on counts, so partitions of the
/// input can be counted independently and combined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    entries: Vec<(String, u64)>,
    index: BTreeMap<String, usize>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `name`.
    pub fn record(&mut self, name: &str) {
        self.record_n(name, 1);
    }

    /// Counts `occurrences` occurrences of `name`.
    pub fn record_n(&mut self, name: &str, occurrences: u64) {
        match self.index.get(name) {
            Some(&idx) => self.entries[idx].1 += occurrences,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), occurrences));
            }
        }
    }

    /// Adds every count of `other`; names new to `self` are appended in
    /// `other`'s first-seen order.
    pub fn merge(&mut self, other: &FrequencyMap) {
        for (name, count) in other.iter() {
            self.record_n(name, count);
        }
    }

    /// Count for `name`, zero when never seen.
    pub fn get(&self, name: &str) -> u64 {
        self.index
            .get(name)
            .map_or(0, |&idx| self.entries[idx].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Names and counts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
    }

    /// Names seen at least `min_occurrences` times, in first-seen order.
    pub fn at_least(&self, min_occurrences: u64) -> impl Iterator<Item = (&str, u64)> {
        self.iter().filter(move |(_, count)| *count >= min_occurrences)
    }

    /// Entries sorted by descending count; equal counts keep first-seen order.
    pub fn most_frequent(&self) -> Vec<(&str, u64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl<'a> FromIterator<&'a str> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut map = Self::new();
        for name in iter {
            map.record(name);
        }
        map
    }
}
