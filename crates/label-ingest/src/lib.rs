//! Product record ingestion.
//!
//! Reads UTF-8 CSV exports with `product_id`, `product_category` and
//! `care_label` columns into [`ProductRecord`]s. Header names are trimmed
//! and matched case-insensitively; extra columns are ignored.
//!
//! [`ProductRecord`]: label_model::ProductRecord

mod error;
mod header;
mod reader;

pub use error::{IngestError, Result};
pub use header::{ColumnIndex, REQUIRED_COLUMNS};
pub use reader::{read_product_records, read_product_records_from_reader};
