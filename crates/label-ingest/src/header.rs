//! Header validation for product record files.

use std::path::Path;

use csv::StringRecord;

use crate::error::{IngestError, Result};

/// Columns every product record file must carry.
pub const REQUIRED_COLUMNS: [&str; 3] = ["product_id", "product_category", "care_label"];

/// Positions of the required columns within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub product_id: usize,
    pub product_category: usize,
    pub care_label: usize,
}

impl ColumnIndex {
    /// Locates the required columns, failing on the first one missing.
    pub fn from_headers(headers: &StringRecord, path: &Path) -> Result<Self> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let locate = |column: &'static str| {
            names
                .iter()
                .position(|name| name.eq_ignore_ascii_case(column))
                .ok_or_else(|| IngestError::MissingColumn {
                    column,
                    path: path.to_path_buf(),
                })
        };
        Ok(Self {
            product_id: locate(REQUIRED_COLUMNS[0])?,
            product_category: locate(REQUIRED_COLUMNS[1])?,
            care_label: locate(REQUIRED_COLUMNS[2])?,
        })
    }
}

/// Trims whitespace and a leading UTF-8 byte-order mark.
pub(crate) fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}
