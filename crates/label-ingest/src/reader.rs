//! CSV reading of product records.

use std::io::Read;
use std::path::{Path, PathBuf};

use label_model::ProductRecord;
use tracing::{debug, info};

use crate::error::{IngestError, Result};
use crate::header::ColumnIndex;

const READER_SOURCE: &str = "<reader>";

/// Reads every product record from the CSV file at `path`.
pub fn read_product_records(path: &Path) -> Result<Vec<ProductRecord>> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    validate_encoding(&bytes, path)?;

    let records = read_records(bytes.as_slice(), path)?;
    info!(path = %path.display(), records = records.len(), "loaded product records");
    Ok(records)
}

/// Reads product records from any CSV source, such as stdin.
pub fn read_product_records_from_reader<R: Read>(reader: R) -> Result<Vec<ProductRecord>> {
    read_records(reader, Path::new(READER_SOURCE))
}

/// Rejects UTF-16 input; a UTF-8 byte-order mark is accepted.
fn validate_encoding(bytes: &[u8], path: &Path) -> Result<()> {
    let encoding = match bytes.get(0..2) {
        Some([0xFF, 0xFE]) => "UTF-16 LE",
        Some([0xFE, 0xFF]) => "UTF-16 BE",
        _ => return Ok(()),
    };
    Err(IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding,
    })
}

fn read_records<R: Read>(source: R, path: &Path) -> Result<Vec<ProductRecord>> {
    let csv_error = |source: csv::Error| IngestError::CsvParse {
        path: PathBuf::from(path),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);
    let headers = reader.headers().map_err(csv_error)?.clone();
    let columns = ColumnIndex::from_headers(&headers, path)?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let row_data = result.map_err(csv_error)?;
        if row_data.iter().all(|v| v.trim().is_empty()) {
            debug!(row = row + 2, "skipping blank row");
            continue;
        }
        let field = |idx: usize| row_data.get(idx).unwrap_or_default().to_string();
        records.push(ProductRecord {
            product_id: field(columns.product_id),
            product_category: field(columns.product_category),
            care_label: field(columns.care_label),
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_reads_records() {
        let file = create_temp_csv(
            b"product_id,product_category,care_label\n\
              1,TOPS/SHIRTS,\"Shell: 100% Cotton\"\n\
              2,BAGS,\"80% Polyester, 20% Elastane\"\n",
        );
        let records = read_product_records(file.path()).unwrap();
        assert_eq!(
            records,
            vec![
                ProductRecord::new("1", "TOPS/SHIRTS", "Shell: 100% Cotton"),
                ProductRecord::new("2", "BAGS", "80% Polyester, 20% Elastane"),
            ]
        );
    }

    #[test]
    fn test_short_rows_default_to_empty() {
        let file = create_temp_csv(b"product_id,product_category,care_label\n7,TOPS\n");
        let records = read_product_records(file.path()).unwrap();
        assert_eq!(records, vec![ProductRecord::new("7", "TOPS", "")]);
    }

    #[test]
    fn test_utf16_rejected() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'p', 0]);
        let err = read_product_records(file.path()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_product_records(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
