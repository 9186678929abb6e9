//! Output generation for parsed care labels.
//!
//! Products are flattened into three CSV tables (`products.csv`,
//! `parts.csv`, `fibers.csv`) or written as one nested JSON document.

mod csv_tables;
mod error;
mod json;
mod rows;

use std::path::{Path, PathBuf};

use label_model::Product;

pub use csv_tables::{
    FIBERS_FILE, PARTS_FILE, PRODUCTS_FILE, write_csv_tables, write_fibers_csv, write_parts_csv,
    write_products_csv,
};
pub use error::{OutputError, Result};
pub use json::{JSON_FILE, write_json};
pub use rows::{FiberRow, PartRow, ProductRow, fiber_rows};

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Csv,
    Json,
}

/// Writes `products` into `dir` in every requested format.
///
/// Returns the paths written, in format order.
pub fn write_outputs(
    products: &[Product],
    dir: &Path,
    formats: &[OutputFormat],
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for format in formats {
        match format {
            OutputFormat::Csv => written.extend(write_csv_tables(products, dir)?),
            OutputFormat::Json => {
                std::fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
                    path: dir.to_path_buf(),
                    source,
                })?;
                let path = dir.join(JSON_FILE);
                write_json(products, &path)?;
                written.push(path);
            }
        }
    }
    Ok(written)
}
