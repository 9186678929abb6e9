//! Full care-label parsing: segments, fibers, weight and metadata.

use label_model::{FiberMention, MetadataVocabulary, Segment, WeightMeasurement};
use tracing::debug;

use crate::error::Result;
use crate::extract::extract;
use crate::segment::segment;
use crate::tagger::MetadataTagger;

/// One segment with its extracted weight and tagged fibers.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPart {
    /// Segment label (`Unknown` for unlabeled text).
    pub label: String,
    pub weight: Option<WeightMeasurement>,
    pub fibers: Vec<FiberMention>,
}

/// Parses care labels with a fixed metadata vocabulary.
#[derive(Debug, Clone)]
pub struct CareLabelParser {
    tagger: MetadataTagger,
}

impl CareLabelParser {
    pub fn new(vocabulary: &MetadataVocabulary) -> Result<Self> {
        Ok(Self {
            tagger: MetadataTagger::new(vocabulary)?,
        })
    }

    pub fn tagger(&self) -> &MetadataTagger {
        &self.tagger
    }

    /// Parses every segment of `text`, in order.
    pub fn parse(&self, text: &str) -> Vec<ParsedPart> {
        let parts: Vec<_> = segment(text)
            .into_iter()
            .map(|segment| self.parse_segment(segment))
            .collect();
        debug!(
            parts = parts.len(),
            fibers = parts.iter().map(|p| p.fibers.len()).sum::<usize>(),
            "parsed care label"
        );
        parts
    }

    /// Extracts weight and fibers from one segment and tags each fiber.
    pub fn parse_segment(&self, segment: Segment) -> ParsedPart {
        let (weight, raw_fibers) = extract(&segment.content);
        let fibers = raw_fibers
            .into_iter()
            .map(|raw| {
                let tagged = self.tagger.tag(&raw.raw_name);
                FiberMention {
                    percentage: raw.percentage,
                    raw_name: raw.raw_name,
                    cleaned_name: tagged.cleaned_name,
                    metadata: tagged.metadata,
                }
            })
            .collect();
        ParsedPart {
            label: segment.label,
            weight,
            fibers,
        }
    }
}
