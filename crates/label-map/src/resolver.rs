//! Frequency-biased fuzzy resolver.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::frequency::FrequencyMap;
use crate::options::ResolverOptions;
use crate::registry::CanonicalRegistry;
use crate::score::{score_keys, token_sort_key};

/// Outcome of resolving one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No registered name scored at or above the threshold; the input was
    /// registered as a new canonical name.
    Inserted(String),
    /// An existing canonical name was selected and its count incremented.
    Matched { canonical: String, score: u8 },
}

impl Resolution {
    pub fn canonical(&self) -> &str {
        match self {
            Self::Inserted(name) => name,
            Self::Matched { canonical, .. } => canonical,
        }
    }

    pub fn into_canonical(self) -> String {
        match self {
            Self::Inserted(name) => name,
            Self::Matched { canonical, .. } => canonical,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    idx: usize,
    count: u64,
    score: u8,
}

impl Candidate {
    /// Higher count wins, then higher score, then earlier registration.
    fn beats(&self, other: &Candidate) -> bool {
        match self.count.cmp(&other.count) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => match self.score.cmp(&other.score) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => self.idx < other.idx,
            },
        }
    }
}

/// Resolves normalized fiber names against a growing [`CanonicalRegistry`].
///
/// The resolver owns its registry. Every call to [`resolve`](Self::resolve)
/// either increments an existing entry or appends a new one, so the result
/// for a name depends on every name resolved before it.
#[derive(Debug, Clone)]
pub struct FiberResolver {
    registry: CanonicalRegistry,
    threshold: u8,
}

impl Default for FiberResolver {
    fn default() -> Self {
        Self::new(ResolverOptions::default().threshold)
    }
}

impl FiberResolver {
    /// Resolver with an empty registry.
    pub fn new(threshold: u8) -> Self {
        Self::with_registry(CanonicalRegistry::new(), threshold)
    }

    pub fn with_registry(registry: CanonicalRegistry, threshold: u8) -> Self {
        Self {
            registry,
            threshold: threshold.min(100),
        }
    }

    /// Resolver whose registry is seeded from first-pass counts.
    pub fn seeded(frequencies: &FrequencyMap, options: &ResolverOptions) -> Self {
        let registry = CanonicalRegistry::seeded(frequencies, options.min_occurrences);
        debug!(
            seeded = registry.len(),
            distinct = frequencies.len(),
            min_occurrences = options.min_occurrences,
            "seeded canonical registry"
        );
        Self::with_registry(registry, options.threshold)
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn registry(&self) -> &CanonicalRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> CanonicalRegistry {
        self.registry
    }

    /// Canonical name for `name`, updating the registry.
    pub fn resolve(&mut self, name: &str) -> String {
        self.resolve_detailed(name).into_canonical()
    }

    /// Like [`resolve`](Self::resolve) but reports whether the name matched
    /// an existing entry and with what score.
    pub fn resolve_detailed(&mut self, name: &str) -> Resolution {
        if self.registry.is_empty() {
            self.registry.add(name, 1);
            trace!(name, "registered first canonical name");
            return Resolution::Inserted(name.to_string());
        }

        let key = token_sort_key(name);
        let mut best: Option<Candidate> = None;
        for (idx, entry) in self.registry.entries().iter().enumerate() {
            let score = score_keys(&key, &entry.key);
            if score < self.threshold {
                continue;
            }
            let candidate = Candidate {
                idx,
                count: entry.count,
                score,
            };
            if best.is_none_or(|current| candidate.beats(&current)) {
                best = Some(candidate);
            }
        }

        match best {
            Some(candidate) => {
                self.registry.increment(candidate.idx);
                let canonical = self.registry.entries()[candidate.idx].name.clone();
                if canonical != name {
                    trace!(
                        name,
                        canonical = %canonical,
                        score = candidate.score,
                        "folded fiber name"
                    );
                }
                Resolution::Matched {
                    canonical,
                    score: candidate.score,
                }
            }
            None => {
                self.registry.add(name, 1);
                trace!(name, "registered new canonical name");
                Resolution::Inserted(name.to_string())
            }
        }
    }
}
