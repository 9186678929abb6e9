//! Registry of canonical fiber names and their usage counts.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::frequency::FrequencyMap;
use crate::score::token_sort_key;

/// A canonical name with its usage count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryEntry {
    pub name: String,
    pub count: u64,
    #[serde(skip)]
    pub(crate) key: String,
}

/// Canonical names in insertion order.
///
/// Entries are only ever appended or incremented, so counts never decrease
/// and the registry never shrinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalRegistry {
    entries: Vec<RegistryEntry>,
    index: BTreeMap<String, usize>,
}

impl CanonicalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with every name counted at least
    /// `min_occurrences` times, carrying its count, in first-seen order.
    pub fn seeded(frequencies: &FrequencyMap, min_occurrences: u64) -> Self {
        let mut registry = Self::new();
        for (name, count) in frequencies.at_least(min_occurrences) {
            registry.add(name, count);
        }
        registry
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Usage count of `name`, if registered.
    pub fn count(&self, name: &str) -> Option<u64> {
        self.index.get(name).map(|&idx| self.entries[idx].count)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Entries sorted by descending count; ties keep insertion order.
    pub fn ranked(&self) -> Vec<&RegistryEntry> {
        let mut ranked: Vec<_> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// Adds `count` uses of `name`, registering it when new.
    pub(crate) fn add(&mut self, name: &str, count: u64) -> usize {
        if let Some(&idx) = self.index.get(name) {
            self.entries[idx].count += count;
            return idx;
        }
        let idx = self.entries.len();
        self.index.insert(name.to_string(), idx);
        self.entries.push(RegistryEntry {
            name: name.to_string(),
            count,
            key: token_sort_key(name),
        });
        idx
    }

    pub(crate) fn increment(&mut self, idx: usize) {
        self.entries[idx].count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_keeps_frequent_names_in_first_seen_order() {
        let mut frequencies = FrequencyMap::new();
        frequencies.record_n("polyester", 150);
        frequencies.record_n("silk", 3);
        frequencies.record_n("cotton", 400);

        let registry = CanonicalRegistry::seeded(&frequencies, 100);
        let names: Vec<_> = registry.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["polyester", "cotton"]);
        assert_eq!(registry.count("cotton"), Some(400));
        assert_eq!(registry.count("silk"), None);
    }

    #[test]
    fn add_existing_increments() {
        let mut registry = CanonicalRegistry::new();
        let first = registry.add("wool", 1);
        let second = registry.add("wool", 2);
        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.count("wool"), Some(3));
    }

    #[test]
    fn ranked_by_count() {
        let mut registry = CanonicalRegistry::new();
        registry.add("a", 1);
        registry.add("b", 5);
        registry.add("c", 1);
        let ranked: Vec<_> = registry.ranked().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(ranked, vec!["b", "a", "c"]);
    }
}
