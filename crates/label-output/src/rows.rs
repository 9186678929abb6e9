//! Flat row types for the CSV tables.

use label_model::{Part, Product, WeightUnit};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow<'a> {
    pub product_id: &'a str,
    pub product_category: &'a str,
    pub product_sub_category: &'a str,
    pub original_care_label: &'a str,
}

impl<'a> From<&'a Product> for ProductRow<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            product_id: &product.product_id,
            product_category: &product.product_category,
            product_sub_category: &product.product_sub_category,
            original_care_label: &product.original_care_label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartRow<'a> {
    pub part_id: u64,
    pub product_id: &'a str,
    pub name: &'a str,
    pub weight: Option<f64>,
    pub weight_unit: Option<WeightUnit>,
}

impl<'a> From<&'a Part> for PartRow<'a> {
    fn from(part: &'a Part) -> Self {
        Self {
            part_id: part.part_id,
            product_id: &part.product_id,
            name: &part.name,
            weight: part.weight,
            weight_unit: part.weight_unit,
        }
    }
}

/// A fiber joined with the name of its part.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FiberRow<'a> {
    pub product_id: &'a str,
    pub part_id: u64,
    pub part_name: &'a str,
    pub name: &'a str,
    pub proportion: Option<f64>,
    pub brand: &'a str,
    pub original_fiber_name: &'a str,
    pub origin_france: bool,
    pub solution_dyed: bool,
    pub recycled: bool,
}

/// Fiber rows of every part, skipping fibers with neither a name nor
/// metadata.
pub fn fiber_rows(products: &[Product]) -> impl Iterator<Item = FiberRow<'_>> {
    products
        .iter()
        .flat_map(|product| &product.parts)
        .flat_map(|part| {
            part.fibers
                .iter()
                .filter(|fiber| fiber.has_content())
                .map(move |fiber| FiberRow {
                    product_id: &fiber.product_id,
                    part_id: fiber.part_id,
                    part_name: &part.name,
                    name: &fiber.name,
                    proportion: fiber.proportion,
                    brand: &fiber.brand,
                    original_fiber_name: &fiber.original_fiber_name,
                    origin_france: fiber.origin_france,
                    solution_dyed: fiber.solution_dyed,
                    recycled: fiber.recycled,
                })
        })
}
