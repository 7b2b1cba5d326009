#![cfg(feature = "excel")]

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use serde_json::json;
use tabular_json::ErrorKind;
use tabular_json::ingestion::excel::{ingest_excel_from_path, read_first_sheet};
use tabular_json::normalize::{ArrayKeySet, NormalizeOptions};
use tabular_json::types::RawValue;

fn tmp_xlsx(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.xlsx"))
}

fn write_people_xlsx(path: &Path) {
    let mut wb = Workbook::new();

    let ws = wb.add_worksheet();
    ws.set_name("People").unwrap();
    ws.write_string(0, 0, "Full Name").unwrap();
    ws.write_string(0, 1, "Age").unwrap();
    ws.write_string(0, 2, "Is Active").unwrap();
    ws.write_string(0, 3, "Tags").unwrap();

    ws.write_string(1, 0, "  Ada Lovelace ").unwrap();
    ws.write_number(1, 1, 36).unwrap();
    ws.write_boolean(1, 2, true).unwrap();
    ws.write_string(1, 3, "math, poetry").unwrap();

    // row 2 left blank

    ws.write_string(3, 0, "Grace Hopper").unwrap();
    ws.write_string(3, 1, "85").unwrap();
    ws.write_string(3, 2, "false").unwrap();
    // Tags missing

    // A second sheet that must be ignored.
    let ws2 = wb.add_worksheet();
    ws2.set_name("Other").unwrap();
    ws2.write_string(0, 0, "ignored").unwrap();
    ws2.write_number(1, 0, 1).unwrap();

    wb.save(path).unwrap();
}

#[test]
fn ingest_excel_happy_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = tmp_xlsx(dir.path(), "people");
    write_people_xlsx(&path);

    let opts = NormalizeOptions {
        array_keys: ArrayKeySet::parse("tags"),
        ..Default::default()
    };
    let rows = ingest_excel_from_path(&path, &opts).unwrap();

    assert_eq!(
        serde_json::to_value(&rows).unwrap(),
        json!([
            {
                "fullName": "Ada Lovelace",
                "age": 36,
                "isActive": true,
                "tags": ["math", "poetry"]
            },
            {
                "fullName": "Grace Hopper",
                "age": 85,
                "isActive": false,
                "tags": [""]
            }
        ])
    );
}

#[test]
fn read_first_sheet_pads_missing_cells_and_skips_blank_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = tmp_xlsx(dir.path(), "raw");
    write_people_xlsx(&path);

    let table = read_first_sheet(&path).unwrap();
    assert_eq!(table.headers, vec!["Full Name", "Age", "Is Active", "Tags"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows[1][3], RawValue::Empty);
    assert!(table.rows.iter().all(|r| r.len() == table.headers.len()));
}

#[test]
fn ingest_excel_blank_and_duplicate_headers() {
    let dir = tempfile::tempdir().unwrap();
    let path = tmp_xlsx(dir.path(), "headers");

    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.write_string(0, 0, "Name").unwrap();
    ws.write_string(0, 2, "Name").unwrap();
    ws.write_string(1, 0, "a").unwrap();
    ws.write_string(1, 1, "b").unwrap();
    ws.write_string(1, 2, "c").unwrap();
    wb.save(&path).unwrap();

    let rows = ingest_excel_from_path(&path, &NormalizeOptions::default()).unwrap();
    assert_eq!(
        serde_json::to_string(&rows).unwrap(),
        r#"[{"name":"a","empty":"b","name1":"c"}]"#
    );
}

#[test]
fn ingest_excel_keeps_fractional_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let path = tmp_xlsx(dir.path(), "numbers");

    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.write_string(0, 0, "Score").unwrap();
    ws.write_number(1, 0, 87.25).unwrap();
    ws.write_number(2, 0, 30.0).unwrap();
    wb.save(&path).unwrap();

    let rows = ingest_excel_from_path(&path, &NormalizeOptions::default()).unwrap();
    assert_eq!(serde_json::to_value(&rows).unwrap(), json!([{"score": 87.25}, {"score": 30}]));
}

#[test]
fn ingest_excel_errors_on_garbage_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.xls");
    std::fs::write(&path, b"this is not a workbook").unwrap();

    let err = ingest_excel_from_path(&path, &NormalizeOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Read);
}
