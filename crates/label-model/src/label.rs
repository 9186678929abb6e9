//! Intermediate values produced while parsing a single care label.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label assigned to text that is not preceded by a `Label:` token.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// A labeled (or unlabeled) span of a care label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Literal label token, or [`UNKNOWN_LABEL`] for leftover text.
    pub label: String,
    /// Stripped content following the label.
    pub content: String,
}

impl Segment {
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
        }
    }

    /// Segment for text that has no label token in front of it.
    pub fn unknown(content: impl Into<String>) -> Self {
        Self::new(UNKNOWN_LABEL, content)
    }

    pub fn is_unknown(&self) -> bool {
        self.label == UNKNOWN_LABEL
    }
}

/// Unit of a fabric weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    /// Plain grams (`g`, `gr`, `gram`, `grams`).
    #[serde(rename = "g")]
    Grams,
    /// Grams per square meter (`g/m2`, `g/m²`, `gm2`).
    #[serde(rename = "g/m²")]
    GramsPerSquareMeter,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::GramsPerSquareMeter => "g/m²",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First weight found in a segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightMeasurement {
    pub value: f64,
    pub unit: WeightUnit,
}

/// Metadata stripped out of a fiber name by the tagger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiberMetadata {
    /// Matched brand token, empty when none matched.
    pub brand: String,
    pub origin_france: bool,
    pub solution_dyed: bool,
    pub recycled: bool,
}

impl FiberMetadata {
    /// True when no metadata was detected.
    pub fn is_empty(&self) -> bool {
        self.brand.is_empty() && !self.origin_france && !self.solution_dyed && !self.recycled
    }
}

/// One `<percentage>% <name>` occurrence inside a segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiberMention {
    /// Parsed percentage; `None` when the numeral does not parse as a float.
    pub percentage: Option<f64>,
    /// Trimmed name text as it appeared in the label.
    pub raw_name: String,
    /// Name left over once metadata tokens are stripped (lowercase).
    pub cleaned_name: String,
    pub metadata: FiberMetadata,
}
