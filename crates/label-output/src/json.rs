//! Nested JSON export.

use std::path::Path;

use label_model::Product;
use tracing::info;

use crate::error::{OutputError, Result};

pub const JSON_FILE: &str = "products.json";

/// Writes `products` as a pretty-printed JSON array.
pub fn write_json(products: &[Product], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(products).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, format!("{json}\n")).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), products = products.len(), "wrote JSON output");
    Ok(())
}
