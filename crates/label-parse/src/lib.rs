//! Care-label parsing.
//!
//! A care label is processed in three steps:
//!
//! 1. [`segment`] splits the text into `Label: content` spans, keeping any
//!    unlabeled leftovers as `Unknown` segments.
//! 2. [`extract`] finds `<pct>% <name>` fiber mentions and the first
//!    weight measurement in each segment.
//! 3. [`MetadataTagger`] strips brand, origin, dye and recycled tokens out
//!    of every fiber name.
//!
//! [`CareLabelParser`] chains the three steps. Nothing here fails on input
//! text: missing structure degrades to `Unknown` segments, empty fiber
//! lists and absent weights.

mod care_label;
mod error;
mod extract;
mod patterns;
mod segment;
mod tagger;

pub use care_label::{CareLabelParser, ParsedPart};
pub use error::{ParseError, Result};
pub use extract::{RawFiber, extract, extract_fibers, extract_weight};
pub use segment::segment;
pub use tagger::{MetadataTagger, TaggedName};
