//! Metadata tagging of raw fiber names.

use label_model::{FiberMetadata, MetadataField, MetadataVocabulary};
use regex::Regex;
use tracing::trace;

use crate::error::{ParseError, Result};
use crate::patterns::TRADEMARK_GLYPHS;

/// Metadata found in a fiber name and the text left once it is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedName {
    pub metadata: FiberMetadata,
    /// Lowercase residue with glyphs removed and whitespace collapsed.
    pub cleaned_name: String,
}

#[derive(Debug, Clone)]
struct TokenPattern {
    token: String,
    pattern: Regex,
}

#[derive(Debug, Clone)]
struct CompiledCategory {
    field: MetadataField,
    tokens: Vec<TokenPattern>,
}

/// Strips vocabulary tokens out of fiber names.
///
/// Categories are applied in vocabulary order and tokens in list order.
/// Every whole-word, case-insensitive occurrence of a token (plus one
/// optional `®`/`™`/`©`) is replaced with a space. Flags turn on at the
/// first removal; the brand keeps the last token that matched.
#[derive(Debug, Clone)]
pub struct MetadataTagger {
    categories: Vec<CompiledCategory>,
}

impl MetadataTagger {
    pub fn new(vocabulary: &MetadataVocabulary) -> Result<Self> {
        let categories = vocabulary
            .categories()
            .iter()
            .map(|category| {
                let tokens = category
                    .tokens
                    .iter()
                    .map(|token| compile_token(category.field, token))
                    .collect::<Result<Vec<_>>>()?;
                Ok(CompiledCategory {
                    field: category.field,
                    tokens,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { categories })
    }

    /// Tags `raw` and returns the metadata plus the cleaned residue.
    pub fn tag(&self, raw: &str) -> TaggedName {
        let mut metadata = FiberMetadata::default();
        let mut text = raw.to_lowercase().trim().to_string();

        for category in &self.categories {
            for token in &category.tokens {
                if !token.pattern.is_match(&text) {
                    continue;
                }
                text = token.pattern.replace_all(&text, " ").into_owned();
                match category.field {
                    MetadataField::Brand => metadata.brand.clone_from(&token.token),
                    MetadataField::OriginFrance => metadata.origin_france = true,
                    MetadataField::SolutionDyed => metadata.solution_dyed = true,
                    MetadataField::Recycled => metadata.recycled = true,
                }
            }
        }

        let without_glyphs = TRADEMARK_GLYPHS.replace_all(&text, " ");
        let cleaned_name = without_glyphs.split_whitespace().collect::<Vec<_>>().join(" ");
        trace!(raw, cleaned_name, ?metadata, "tagged fiber name");
        TaggedName {
            metadata,
            cleaned_name,
        }
    }
}

fn compile_token(field: MetadataField, token: &str) -> Result<TokenPattern> {
    let pattern = Regex::new(&format!(r"(?i)\b{}[®™©]?\b", regex::escape(token))).map_err(
        |source| ParseError::TokenPattern {
            field,
            token: token.to_string(),
            source,
        },
    )?;
    Ok(TokenPattern {
        token: token.to_string(),
        pattern,
    })
}
