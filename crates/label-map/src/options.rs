use serde::{Deserialize, Serialize};

/// Resolver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverOptions {
    /// Minimum token-sort score (0–100) for a registered name to match.
    pub threshold: u8,
    /// Minimum first-pass count for a name to be seeded into the registry.
    pub min_occurrences: u64,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            threshold: 95,
            min_occurrences: 100,
        }
    }
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the match threshold, capped at 100.
    #[must_use]
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold.min(100);
        self
    }

    #[must_use]
    pub fn with_min_occurrences(mut self, min_occurrences: u64) -> Self {
        self.min_occurrences = min_occurrences;
        self
    }
}
