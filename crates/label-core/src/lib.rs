//! Two-pass care-label processing.
//!
//! Pass one ([`build_frequency_map`]) counts normalized fiber names across
//! the whole input. Pass two ([`LabelProcessor`]) seeds a resolver with
//! the frequent names and turns every record into a [`Product`] with
//! globally numbered parts and canonical fiber names.
//!
//! [`Product`]: label_model::Product

mod options;
mod pipeline;

pub use options::ProcessingOptions;
pub use pipeline::{
    LabelProcessor, PipelineOutput, ResolutionStats, build_frequency_map, run_two_pass,
};
