//! Ordered metadata vocabulary used by the fiber-name tagger.
//!
//! The order of categories and the order of tokens inside a category are
//! part of the tagging behavior: categories are stripped one after another,
//! and for the brand category the last matching token wins.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Metadata field a category writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataField {
    Brand,
    OriginFrance,
    SolutionDyed,
    Recycled,
}

/// Whether a field stores the matched token or a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataKind {
    Text,
    Flag,
}

impl MetadataField {
    pub fn kind(self) -> MetadataKind {
        match self {
            Self::Brand => MetadataKind::Text,
            Self::OriginFrance | Self::SolutionDyed | Self::Recycled => MetadataKind::Flag,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::OriginFrance => "origin_france",
            Self::SolutionDyed => "solution_dyed",
            Self::Recycled => "recycled",
        }
    }
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tokens that set one metadata field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataCategory {
    pub field: MetadataField,
    pub tokens: Vec<String>,
}

impl MetadataCategory {
    pub fn new<I, S>(field: MetadataField, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field,
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn kind(&self) -> MetadataKind {
        self.field.kind()
    }
}

/// Ordered list of metadata categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MetadataCategory>", into = "Vec<MetadataCategory>")]
pub struct MetadataVocabulary {
    categories: Vec<MetadataCategory>,
}

impl MetadataVocabulary {
    /// Build a vocabulary, rejecting empty tokens and repeated fields.
    pub fn new(categories: Vec<MetadataCategory>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for category in &categories {
            if !seen.insert(category.field) {
                return Err(ModelError::DuplicateCategory {
                    field: category.field,
                });
            }
            if category.tokens.iter().any(|token| token.trim().is_empty()) {
                return Err(ModelError::EmptyToken {
                    field: category.field,
                });
            }
        }
        Ok(Self { categories })
    }

    /// Parse a JSON array of `{ "field": ..., "tokens": [...] }` objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let categories: Vec<MetadataCategory> = serde_json::from_str(json)?;
        Self::new(categories)
    }

    pub fn categories(&self) -> &[MetadataCategory] {
        &self.categories
    }

    pub fn tokens_for(&self, field: MetadataField) -> &[String] {
        self.categories
            .iter()
            .find(|category| category.field == field)
            .map(|category| category.tokens.as_slice())
            .unwrap_or_default()
    }
}

impl TryFrom<Vec<MetadataCategory>> for MetadataVocabulary {
    type Error = ModelError;

    fn try_from(categories: Vec<MetadataCategory>) -> Result<Self> {
        Self::new(categories)
    }
}

impl From<MetadataVocabulary> for Vec<MetadataCategory> {
    fn from(vocabulary: MetadataVocabulary) -> Self {
        vocabulary.categories
    }
}

impl Default for MetadataVocabulary {
    fn default() -> Self {
        Self {
            categories: vec![
                MetadataCategory::new(MetadataField::Brand, ["sorona", "cordura", "repreve"]),
                MetadataCategory::new(MetadataField::OriginFrance, ["fr"]),
                MetadataCategory::new(MetadataField::SolutionDyed, ["solution dyed"]),
                MetadataCategory::new(MetadataField::Recycled, ["recycled"]),
            ],
        }
    }
}
