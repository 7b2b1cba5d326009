use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Coarse classification of a [`ConvertError`].
///
/// Every failure is terminal; the kind only decides how it is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be opened, decoded, or parsed.
    Read,
    /// The output directory or file could not be created or written.
    Write,
    /// The tool was invoked with missing or invalid arguments.
    Usage,
}

/// Error type returned by readers, normalization and output writing.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file could not be opened or read.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid UTF-8.
    #[error("'{path}' is not valid UTF-8: {source}")]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// CSV parse error (e.g. a record with the wrong number of fields).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "excel")]
    /// Spreadsheet parse error (feature-gated behind `excel`).
    #[error("spreadsheet error: {0}")]
    Excel(#[from] calamine::Error),

    #[error("workbook '{path}' has no sheets")]
    NoSheets { path: PathBuf },

    /// A column label normalized to an empty key while empty keys are rejected.
    #[error("column {column} ('{label}') normalizes to an empty key")]
    EmptyKey { column: usize, label: String },

    /// The output directory or file could not be created or written.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failed.
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing to a stream (the console) failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Missing/invalid invocation arguments. The message is shown to the user verbatim.
    #[error("{message}")]
    Usage { message: String },
}

impl ConvertError {
    /// Which of the three error kinds this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Io { .. }
            | ConvertError::Encoding { .. }
            | ConvertError::Csv(_)
            | ConvertError::NoSheets { .. }
            | ConvertError::EmptyKey { .. } => ErrorKind::Read,
            #[cfg(feature = "excel")]
            ConvertError::Excel(_) => ErrorKind::Read,
            ConvertError::Write { .. } | ConvertError::Serialize(_) | ConvertError::Output(_) => {
                ErrorKind::Write
            }
            ConvertError::Usage { .. } => ErrorKind::Usage,
        }
    }

    pub(crate) fn usage(message: impl Into<String>) -> Self {
        ConvertError::Usage {
            message: message.into(),
        }
    }
}
