use std::io::Cursor;

use label_ingest::{IngestError, read_product_records, read_product_records_from_reader};
use label_model::ProductRecord;

#[test]
fn extra_columns_and_padded_headers() {
    let data = "sku, care_label ,product_id,product_category\n\
                X1,\"Lining: 100% Viscose\",42,WOMEN/DRESSES\n";
    let records = read_product_records_from_reader(Cursor::new(data)).unwrap();
    assert_eq!(
        records,
        vec![ProductRecord::new("42", "WOMEN/DRESSES", "Lining: 100% Viscose")]
    );
}

#[test]
fn multiline_care_label_survives_quoting() {
    let data = "product_id,product_category,care_label\n\
                1,TOPS,\"Shell: 100% Wool\nLining: 100% Cotton\"\n";
    let records = read_product_records_from_reader(Cursor::new(data)).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].care_label, "Shell: 100% Wool\nLining: 100% Cotton");
}

#[test]
fn missing_care_label_column() {
    let data = "product_id,product_category\n1,TOPS\n";
    let err = read_product_records_from_reader(Cursor::new(data)).unwrap_err();
    assert!(matches!(
        err,
        IngestError::MissingColumn {
            column: "care_label",
            ..
        }
    ));
}

#[test]
fn utf8_bom_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.csv");
    std::fs::write(
        &path,
        "\u{feff}product_id,product_category,care_label\n9,BAGS,100% Nylon\n",
    )
    .unwrap();
    let records = read_product_records(&path).unwrap();
    assert_eq!(records, vec![ProductRecord::new("9", "BAGS", "100% Nylon")]);
}
