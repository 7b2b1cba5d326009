//! CSV ingestion implementation.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ConvertError, ConvertResult};
use crate::normalize::NormalizeOptions;
use crate::types::{NormalizedRow, RawValue};

/// Read a CSV file and normalize it into rows.
///
/// Rules:
///
/// - CSV must have a header row; each header becomes a canonical key.
/// - Empty lines are skipped.
/// - Every record must have as many fields as the header.
/// - The whole file is read into memory and must be valid UTF-8.
pub fn ingest_csv_from_path(
    path: impl AsRef<Path>,
    options: &NormalizeOptions,
) -> ConvertResult<Vec<NormalizedRow>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ConvertError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read csv input");
    ingest_csv_from_str(&text, options)
}

/// Normalize CSV text held in memory.
pub fn ingest_csv_from_str(input: &str, options: &NormalizeOptions) -> ConvertResult<Vec<NormalizedRow>> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());
    ingest_csv_from_reader(&mut rdr, options)
}

/// Normalize CSV data from an existing CSV reader.
///
/// Header labels are converted to canonical keys before any record is read, so each record is
/// fully normalized as it is parsed.
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    options: &NormalizeOptions,
) -> ConvertResult<Vec<NormalizedRow>> {
    let headers = rdr.headers()?.clone();
    let keys = options.canonical_headers(headers.iter())?;

    let mut rows: Vec<NormalizedRow> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let cells = record.iter().map(|field| RawValue::Str(field.to_owned()));
        rows.push(options.normalize_row(&keys, cells));
    }

    debug!(rows = rows.len(), columns = keys.len(), "parsed csv records");
    Ok(rows)
}
