//! Frequency pass and resolving pass over product records.

use label_map::{CanonicalRegistry, FiberResolver, FrequencyMap, Resolution};
use label_model::{Fiber, MetadataVocabulary, Part, Product, ProductRecord};
use label_normalize::{clean_text, normalize_fiber_name, split_category};
use label_parse::{CareLabelParser, ParsedPart, Result};
use tracing::{debug, info, info_span};

use crate::options::ProcessingOptions;

/// Counts normalized fiber names across all records.
///
/// Names are normalized from the tagged residue, so brand and other
/// metadata tokens never reach the counts. No resolver is involved.
pub fn build_frequency_map<'a, I>(
    records: I,
    vocabulary: &MetadataVocabulary,
) -> Result<FrequencyMap>
where
    I: IntoIterator<Item = &'a ProductRecord>,
{
    let parser = CareLabelParser::new(vocabulary)?;
    let mut frequencies = FrequencyMap::new();
    let mut labels = 0usize;
    for record in records {
        labels += 1;
        for part in parser.parse(&record.care_label) {
            for fiber in &part.fibers {
                frequencies.record(&normalize_fiber_name(&fiber.cleaned_name));
            }
        }
    }
    debug!(
        labels,
        distinct = frequencies.len(),
        mentions = frequencies.total(),
        "built fiber frequency map"
    );
    Ok(frequencies)
}

/// How resolved names were obtained during the second pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionStats {
    /// Names folded onto an existing canonical name.
    pub matched: u64,
    /// Names registered as new canonical names.
    pub inserted: u64,
}

/// Turns records into products, resolving fiber names as it goes.
///
/// Part ids increase across every record processed by the same instance,
/// starting at 1. Records must be fed in a stable order: the canonical
/// name chosen for a fiber depends on all resolutions before it.
#[derive(Debug)]
pub struct LabelProcessor {
    parser: CareLabelParser,
    resolver: FiberResolver,
    next_part_id: u64,
    stats: ResolutionStats,
}

impl LabelProcessor {
    pub fn new(vocabulary: &MetadataVocabulary, resolver: FiberResolver) -> Result<Self> {
        Ok(Self {
            parser: CareLabelParser::new(vocabulary)?,
            resolver,
            next_part_id: 1,
            stats: ResolutionStats::default(),
        })
    }

    /// Processor whose resolver is seeded from first-pass counts.
    pub fn seeded(frequencies: &FrequencyMap, options: &ProcessingOptions) -> Result<Self> {
        let resolver = FiberResolver::seeded(frequencies, &options.resolver);
        Self::new(&options.vocabulary, resolver)
    }

    pub fn process(&mut self, record: &ProductRecord) -> Product {
        let (category, sub_category) = split_category(&record.product_category);
        let parts = self
            .parser
            .parse(&record.care_label)
            .into_iter()
            .map(|parsed| self.build_part(&record.product_id, parsed))
            .collect();
        Product {
            product_id: record.product_id.clone(),
            product_category: clean_text(category),
            product_sub_category: clean_text(sub_category),
            original_care_label: record.care_label.clone(),
            parts,
        }
    }

    fn build_part(&mut self, product_id: &str, parsed: ParsedPart) -> Part {
        let part_id = self.next_part_id;
        self.next_part_id += 1;
        let fibers = parsed
            .fibers
            .into_iter()
            .map(|mention| {
                let key = normalize_fiber_name(&mention.cleaned_name);
                let resolution = self.resolver.resolve_detailed(&key);
                match resolution {
                    Resolution::Matched { .. } => self.stats.matched += 1,
                    Resolution::Inserted(_) => self.stats.inserted += 1,
                }
                Fiber {
                    product_id: product_id.to_string(),
                    part_id,
                    name: resolution.into_canonical(),
                    proportion: mention.percentage,
                    brand: mention.metadata.brand,
                    original_fiber_name: mention.raw_name,
                    origin_france: mention.metadata.origin_france,
                    solution_dyed: mention.metadata.solution_dyed,
                    recycled: mention.metadata.recycled,
                }
            })
            .collect();
        Part {
            part_id,
            product_id: product_id.to_string(),
            name: clean_text(&parsed.label),
            weight: parsed.weight.map(|w| w.value),
            weight_unit: parsed.weight.map(|w| w.unit),
            fibers,
        }
    }

    pub fn stats(&self) -> ResolutionStats {
        self.stats
    }

    pub fn registry(&self) -> &CanonicalRegistry {
        self.resolver.registry()
    }

    pub fn into_registry(self) -> CanonicalRegistry {
        self.resolver.into_registry()
    }
}

/// Result of a full two-pass run.
#[derive(Debug)]
pub struct PipelineOutput {
    pub products: Vec<Product>,
    /// First-pass counts of normalized fiber names.
    pub frequencies: FrequencyMap,
    /// Canonical names and their final usage counts.
    pub registry: CanonicalRegistry,
    pub stats: ResolutionStats,
}

/// Runs the frequency pass then the resolving pass over `records`.
pub fn run_two_pass(
    records: &[ProductRecord],
    options: &ProcessingOptions,
) -> Result<PipelineOutput> {
    let span = info_span!("two_pass", records = records.len());
    let _guard = span.enter();

    let frequencies = build_frequency_map(records, &options.vocabulary)?;
    let mut processor = LabelProcessor::seeded(&frequencies, options)?;
    let products: Vec<_> = records
        .iter()
        .map(|record| processor.process(record))
        .collect();
    let stats = processor.stats();
    let registry = processor.into_registry();

    info!(
        products = products.len(),
        canonical_names = registry.len(),
        matched = stats.matched,
        inserted = stats.inserted,
        "processed care labels"
    );
    Ok(PipelineOutput {
        products,
        frequencies,
        registry,
        stats,
    })
}
