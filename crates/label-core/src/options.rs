use label_map::ResolverOptions;
use label_model::MetadataVocabulary;
use serde::{Deserialize, Serialize};

/// Settings shared by both pipeline passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessingOptions {
    pub resolver: ResolverOptions,
    pub vocabulary: MetadataVocabulary,
}

impl ProcessingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(mut self, resolver: ResolverOptions) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_vocabulary(mut self, vocabulary: MetadataVocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }
}
