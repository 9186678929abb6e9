//! CLI library components for the care-label tool.

pub mod logging;
pub mod report;
