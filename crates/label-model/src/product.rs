//! Input rows and the structured records assembled from them.

use serde::{Deserialize, Serialize};

use crate::label::WeightUnit;

/// One input row: a product and its raw care label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_id: String,
    /// Category path such as `ACCESSORY/PHONE-CASE`.
    pub product_category: String,
    pub care_label: String,
}

impl ProductRecord {
    pub fn new(
        product_id: impl Into<String>,
        product_category: impl Into<String>,
        care_label: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_category: product_category.into(),
            care_label: care_label.into(),
        }
    }
}

/// A fiber of a part, with its resolved canonical name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fiber {
    pub product_id: String,
    pub part_id: u64,
    /// Canonical fiber name chosen by the resolver.
    pub name: String,
    /// Percentage of the part made of this fiber.
    pub proportion: Option<f64>,
    pub brand: String,
    /// Raw fiber text before tagging and normalization.
    pub original_fiber_name: String,
    pub origin_france: bool,
    pub solution_dyed: bool,
    pub recycled: bool,
}

impl Fiber {
    /// True when the fiber carries a name or any metadata worth exporting.
    pub fn has_content(&self) -> bool {
        !self.name.is_empty()
            || !self.brand.is_empty()
            || self.origin_france
            || self.solution_dyed
            || self.recycled
    }
}

/// A named part of a product (shell, lining, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Globally unique part id assigned by the pipeline.
    pub part_id: u64,
    pub product_id: String,
    pub name: String,
    pub weight: Option<f64>,
    pub weight_unit: Option<WeightUnit>,
    pub fibers: Vec<Fiber>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub product_category: String,
    pub product_sub_category: String,
    pub original_care_label: String,
    pub parts: Vec<Part>,
}

impl Product {
    /// Total number of fibers across all parts.
    pub fn fiber_count(&self) -> usize {
        self.parts.iter().map(|part| part.fibers.len()).sum()
    }
}
