use super::*;
use crate::schema::{dataset_table, products_table};
use crate::validator::StatementValidator;
use sx_core::ProductId;

fn record() -> MetadataRecord {
    serde_json::from_str(
        r#"{
            "dataset": "sst_20200101",
            "begin_datetime": "2020-01-01 00:00:00",
            "end_datetime": "2020-01-02 00:00:00",
            "min_zoom_level": 0,
            "max_zoom_level": 5,
            "resolutions": [40000, 20000.5],
            "bbox_str": "POLYGON((0 0,10 0,10 10,0 10,0 0))",
            "shape_str": "POLYGON((1 1,9 1,9 9,1 9,1 1))"
        }"#,
    )
    .unwrap()
}

fn table() -> TableSchema {
    dataset_table(&ProductId::try_new("sst").unwrap())
}

#[test]
fn test_row_tuple_column_order() {
    let record = record();
    let row = DatasetRow::from_record(&record, &record.dataset, None);
    let tuple = row_tuple(&table(), &row).unwrap();
    assert_eq!(
        tuple,
        "('sst_20200101', '', '2020-01-01 00:00:00', '2020-01-02 00:00:00', 0, 5, \
         '40000,20000.5', 'POLYGON((0 0,10 0,10 10,0 10,0 0))', NULL, \
         'POLYGON((1 1,9 1,9 9,1 9,1 1))', ST_GeomFromText('POLYGON((1 1,9 1,9 9,1 9,1 1))'))"
    );
}

#[test]
fn test_row_tuple_geometry_override() {
    let record = record();
    let row = DatasetRow::from_record(&record, record.xidl_dataset_name(), Some("POINT(0 0)"));
    let tuple = row_tuple(&table(), &row).unwrap();
    assert!(tuple.starts_with("('sst_20200101_XIDLfix', "));
    assert!(tuple.ends_with(", ST_GeomFromText('POINT(0 0)'))"));
    // shape_text keeps the original description
    assert!(tuple.contains("'POLYGON((1 1,9 1,9 9,1 9,1 1))', ST_GeomFromText"));
}

#[test]
fn test_row_tuple_bbox_geometry_is_null() {
    let record = record();
    let row = DatasetRow::from_record(&record, &record.dataset, None);
    let literals = row.literals();
    assert_eq!(literals[8].render(), "NULL");
    assert_eq!(literals[1].render(), "''");
}

#[test]
fn test_row_tuple_escapes_dataset_name() {
    let mut record = record();
    record.dataset = "o'brien\\x".to_string();
    let row = DatasetRow::from_record(&record, &record.dataset, None);
    let tuple = row_tuple(&table(), &row).unwrap();
    assert!(tuple.starts_with(r"('o''brien\\x', "));
}

#[test]
fn test_row_tuple_rejects_wrong_table() {
    let record = record();
    let row = DatasetRow::from_record(&record, &record.dataset, None);
    let err = row_tuple(&products_table(), &row).unwrap_err();
    assert!(matches!(
        err,
        SqlError::ArityMismatch {
            expected: 3,
            found: 11,
            ..
        }
    ));
}

#[test]
fn test_row_tuple_forms_valid_insert() {
    let record = record();
    let table = table();
    let row = DatasetRow::from_record(&record, &record.dataset, None);
    let sql = format!(
        "{}{}{}",
        table.insert_header(),
        row_tuple(&table, &row).unwrap(),
        table.upsert_trailer()
    );
    assert_eq!(StatementValidator::new().validate(&sql).unwrap(), 1);
}
