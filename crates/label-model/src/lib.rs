//! Care-label data model.
//!
//! Types shared by the parsing, matching and output crates: the transient
//! parse products ([`Segment`], [`FiberMention`], [`WeightMeasurement`]),
//! the final records ([`Product`], [`Part`], [`Fiber`]) and the ordered
//! metadata vocabulary that drives the tagger.

pub mod error;
pub mod label;
pub mod product;
pub mod vocabulary;

pub use error::{ModelError, Result};
pub use label::{
    FiberMention, FiberMetadata, Segment, UNKNOWN_LABEL, WeightMeasurement, WeightUnit,
};
pub use product::{Fiber, Part, Product, ProductRecord};
pub use vocabulary::{MetadataCategory, MetadataField, MetadataKind, MetadataVocabulary};
