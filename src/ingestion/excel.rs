#![cfg(feature = "excel")]

use std::collections::{HashMap, HashSet};
use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use tracing::debug;

use crate::error::{ConvertError, ConvertResult};
use crate::normalize::NormalizeOptions;
use crate::types::{NormalizedRow, RawTable, RawValue};

/// Label given to blank header cells (`__EMPTY`, `__EMPTY_1`, ...).
const EMPTY_HEADER: &str = "__EMPTY";

/// Read a workbook (`.xlsx`, `.xls`, ...) and normalize the rows of its first sheet.
pub fn ingest_excel_from_path(
    path: impl AsRef<Path>,
    options: &NormalizeOptions,
) -> ConvertResult<Vec<NormalizedRow>> {
    let table = read_first_sheet(path)?;
    let keys = options.canonical_headers(table.headers.iter().map(String::as_str))?;

    let rows: Vec<NormalizedRow> = table
        .rows
        .into_iter()
        .map(|cells| options.normalize_row(&keys, cells))
        .collect();
    Ok(rows)
}

/// Read the first sheet (by position) of a workbook into a [`RawTable`].
///
/// Behavior:
/// - The first row of the sheet's used range is the header row
/// - Missing headers become `__EMPTY`, `__EMPTY_1`, ...; repeated headers get `_1`, `_2`, ...
/// - Rows whose cells are all empty are skipped
/// - Missing cells are [`RawValue::Empty`], never absent
pub fn read_first_sheet(path: impl AsRef<Path>) -> ConvertResult<RawTable> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ConvertError::NoSheets {
            path: path.to_path_buf(),
        })??;

    let table = sheet_to_table(&range);
    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.headers.len(),
        "read first sheet"
    );
    Ok(table)
}

fn sheet_to_table(range: &Range<Data>) -> RawTable {
    let mut rows_iter = range.rows();
    let Some(header_row) = rows_iter.next() else {
        return RawTable::default();
    };
    let headers = disambiguate_headers(header_row.iter().map(cell_to_header_string));

    let rows = rows_iter
        .filter(|row| row.iter().any(|c| !matches!(c, Data::Empty)))
        .map(|row| {
            (0..headers.len())
                .map(|col| row.get(col).map_or(RawValue::Empty, convert_cell))
                .collect()
        })
        .collect();

    RawTable::new(headers, rows)
}

/// Make header labels unique the way spreadsheet-to-JSON exporters do.
fn disambiguate_headers<I>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut counters: HashMap<String, usize> = HashMap::new();
    let mut taken: HashSet<String> = HashSet::new();
    labels
        .into_iter()
        .map(|label| {
            let base = if label.is_empty() {
                EMPTY_HEADER.to_string()
            } else {
                label
            };
            let mut unique = base.clone();
            let count = counters.entry(base.clone()).or_insert(0);
            while taken.contains(&unique) {
                *count += 1;
                unique = format!("{base}_{count}");
            }
            taken.insert(unique.clone());
            unique
        })
        .collect()
}

fn cell_to_header_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
        Data::Empty => String::new(),
    }
}

fn convert_cell(c: &Data) -> RawValue {
    match c {
        Data::Empty => RawValue::Empty,
        Data::String(s) => RawValue::Str(s.clone()),
        Data::Int(i) => RawValue::Int(*i),
        Data::Float(f) => RawValue::Float(*f),
        Data::Bool(b) => RawValue::Bool(*b),
        Data::DateTime(dt) => RawValue::Float(dt.as_f64()),
        Data::DateTimeIso(s) => RawValue::Str(s.clone()),
        Data::DurationIso(s) => RawValue::Str(s.clone()),
        Data::Error(e) => RawValue::Str(e.to_string()),
    }
}
