//! Unified ingestion entrypoint.
//!
//! Most callers should use [`ingest_from_path`], which reads a file and returns its normalized
//! rows.
//!
//! - If [`ConvertOptions::format`] is `None`, the input format is inferred from the file
//!   extension.
//! - If a [`super::observability::ConversionObserver`] is provided, success/failure is reported
//!   to it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{ConvertError, ConvertResult};
use crate::normalize::NormalizeOptions;
use crate::types::NormalizedRow;

use super::csv;
use super::observability::{ConversionContext, ConversionObserver, ConversionStats};

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Comma-separated values.
    Csv,
    /// Office Open XML workbook.
    Xlsx,
    /// Legacy binary workbook.
    Xls,
}

impl InputFormat {
    /// Every supported format, in the order they are listed to users.
    pub const ALL: [InputFormat; 3] = [InputFormat::Csv, InputFormat::Xlsx, InputFormat::Xls];

    /// Parse an input format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Xlsx),
            "xls" => Some(Self::Xls),
            _ => None,
        }
    }

    /// Infer the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|s| s.to_str())
            .and_then(Self::from_extension)
    }

    /// Canonical extension, as used in output file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Xls => "xls",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options controlling conversion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone, Default)]
pub struct ConvertOptions {
    /// If `None`, auto-detect format from file extension.
    pub format: Option<InputFormat>,
    /// Array keys and empty-key handling.
    pub normalize: NormalizeOptions,
    /// Optional observer for logging.
    pub observer: Option<Arc<dyn ConversionObserver>>,
}

impl fmt::Debug for ConvertOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertOptions")
            .field("format", &self.format)
            .field("normalize", &self.normalize)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl ConvertOptions {
    /// The format to read `path` as: the explicit override, or the one implied by its extension.
    pub fn resolve_format(&self, path: &Path) -> ConvertResult<InputFormat> {
        match self.format {
            Some(f) => Ok(f),
            None => infer_format_from_path(path),
        }
    }
}

/// Read `path` and return its normalized rows.
///
/// - `.csv` goes through the delimited-text reader, `.xlsx`/`.xls` through the spreadsheet
///   reader (first sheet only)
/// - an unsupported extension is a usage error
///
/// When an observer is configured, this function reports `on_success` with the row count or
/// `on_failure` with the error kind.
///
/// ```no_run
/// use tabular_json::ingestion::{ingest_from_path, ConvertOptions};
/// use tabular_json::normalize::{ArrayKeySet, NormalizeOptions};
///
/// # fn main() -> Result<(), tabular_json::ConvertError> {
/// let opts = ConvertOptions {
///     normalize: NormalizeOptions {
///         array_keys: ArrayKeySet::parse("tags"),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// let rows = ingest_from_path("people.csv", &opts)?;
/// println!("rows={}", rows.len());
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(
    path: impl AsRef<Path>,
    options: &ConvertOptions,
) -> ConvertResult<Vec<NormalizedRow>> {
    let path = path.as_ref();
    let fmt = options.resolve_format(path)?;

    let ctx = ConversionContext {
        path: path.to_path_buf(),
        format: fmt,
    };

    let result = match fmt {
        InputFormat::Csv => csv::ingest_csv_from_path(path, &options.normalize),
        InputFormat::Xlsx | InputFormat::Xls => ingest_excel_dispatch(path, &options.normalize),
    };

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(rows) => obs.on_success(&ctx, ConversionStats { rows: rows.len() }),
            Err(e) => obs.on_failure(&ctx, e.kind(), e),
        }
    }

    result
}

/// Message used when the input extension is not one of [`InputFormat::ALL`].
pub fn unsupported_format_message() -> String {
    let names: Vec<&str> = InputFormat::ALL.iter().map(|f| f.as_str()).collect();
    format!("Invalid input file format - supported: {}", names.join(", "))
}

fn infer_format_from_path(path: &Path) -> ConvertResult<InputFormat> {
    InputFormat::from_path(path).ok_or_else(|| ConvertError::usage(unsupported_format_message()))
}

fn ingest_excel_dispatch(path: &Path, options: &NormalizeOptions) -> ConvertResult<Vec<NormalizedRow>> {
    #[cfg(feature = "excel")]
    {
        super::excel::ingest_excel_from_path(path, options)
    }

    #[cfg(not(feature = "excel"))]
    {
        let _ = (path, options);
        Err(ConvertError::usage(
            "spreadsheet input not enabled (enable cargo feature 'excel')",
        ))
    }
}
