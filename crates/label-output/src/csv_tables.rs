//! Products, parts and fibers as three CSV tables.

use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};
use label_model::Product;
use serde::Serialize;
use tracing::info;

use crate::error::{OutputError, Result};
use crate::rows::{PartRow, ProductRow, fiber_rows};

pub const PRODUCTS_FILE: &str = "products.csv";
pub const PARTS_FILE: &str = "parts.csv";
pub const FIBERS_FILE: &str = "fibers.csv";

/// Writes the three tables into `dir`, creating it when missing.
///
/// Returns the written paths in products, parts, fibers order.
pub fn write_csv_tables(products: &[Product], dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let products_path = dir.join(PRODUCTS_FILE);
    write_file(&products_path, |w| write_products_csv(products, w))?;
    let parts_path = dir.join(PARTS_FILE);
    write_file(&parts_path, |w| write_parts_csv(products, w))?;
    let fibers_path = dir.join(FIBERS_FILE);
    write_file(&fibers_path, |w| write_fibers_csv(products, w))?;

    info!(
        dir = %dir.display(),
        products = products.len(),
        "wrote CSV tables"
    );
    Ok(vec![products_path, parts_path, fibers_path])
}

pub fn write_products_csv<W: Write>(products: &[Product], writer: W) -> csv::Result<()> {
    write_rows(products.iter().map(ProductRow::from), writer)
}

pub fn write_parts_csv<W: Write>(products: &[Product], writer: W) -> csv::Result<()> {
    let rows = products
        .iter()
        .flat_map(|product| &product.parts)
        .map(PartRow::from);
    write_rows(rows, writer)
}

/// Writes one row per exported fiber; see [`fiber_rows`] for the filter.
pub fn write_fibers_csv<W: Write>(products: &[Product], writer: W) -> csv::Result<()> {
    write_rows(fiber_rows(products), writer)
}

fn write_rows<I, T, W>(rows: I, writer: W) -> csv::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Serialize,
    W: Write,
{
    let mut csv_writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn write_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(std::fs::File) -> csv::Result<()>,
{
    let file = std::fs::File::create(path).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    write(file).map_err(|source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    })
}
