//! Aggregates shown in the run summary.

use std::collections::BTreeMap;

use label_model::Product;

/// Counts for one product category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: String,
    pub products: usize,
    pub parts: usize,
    pub fibers: usize,
    /// Products whose label yielded no fiber at all.
    pub without_fibers: usize,
}

/// Per-category counts, sorted by category name.
pub fn summarize_by_category(products: &[Product]) -> Vec<CategorySummary> {
    let mut by_category: BTreeMap<&str, CategorySummary> = BTreeMap::new();
    for product in products {
        let summary = by_category
            .entry(product.product_category.as_str())
            .or_insert_with(|| CategorySummary {
                category: product.product_category.clone(),
                ..CategorySummary::default()
            });
        let fibers = product.fiber_count();
        summary.products += 1;
        summary.parts += product.parts.len();
        summary.fibers += fibers;
        if fibers == 0 {
            summary.without_fibers += 1;
        }
    }
    by_category.into_values().collect()
}

/// Sums the per-category counts into one row.
pub fn total(summaries: &[CategorySummary]) -> CategorySummary {
    summaries
        .iter()
        .fold(CategorySummary::default(), |mut acc, summary| {
            acc.products += summary.products;
            acc.parts += summary.parts;
            acc.fibers += summary.fibers;
            acc.without_fibers += summary.without_fibers;
            acc
        })
}
