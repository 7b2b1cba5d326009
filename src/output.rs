//! JSON output: console or `<destination>-<format>.json`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConvertError, ConvertResult};
use crate::ingestion::InputFormat;
use crate::types::NormalizedRow;

/// Path of the file written for `destination`: `<destination>-<format>.json`.
pub fn output_file_path(destination: &Path, format: InputFormat) -> PathBuf {
    let mut name = destination.as_os_str().to_owned();
    name.push(format!("-{}.json", format.as_str()));
    PathBuf::from(name)
}

/// Pretty-print `rows` as a JSON array (2-space indent) into `writer`.
pub fn write_json<W: Write>(rows: &[NormalizedRow], mut writer: W) -> ConvertResult<()> {
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write `rows` to `<destination>-<format>.json`, creating missing parent directories.
///
/// The document is serialized before the file is created, so a failure never leaves a partial
/// file behind. Returns the path written.
pub fn write_to_destination(
    rows: &[NormalizedRow],
    destination: &Path,
    format: InputFormat,
) -> ConvertResult<PathBuf> {
    let path = output_file_path(destination, format);
    let body = serde_json::to_vec_pretty(rows)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| ConvertError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::write(&path, body).map_err(|source| ConvertError::Write {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), rows = rows.len(), "wrote json output");
    Ok(path)
}

/// Send `rows` to `destination` if given, otherwise to `console`.
///
/// Returns the written file path, or `None` when the console was used.
pub fn emit<W: Write>(
    rows: &[NormalizedRow],
    destination: Option<&Path>,
    format: InputFormat,
    console: W,
) -> ConvertResult<Option<PathBuf>> {
    match destination {
        Some(dest) => write_to_destination(rows, dest, format).map(Some),
        None => write_json(rows, console).map(|()| None),
    }
}
