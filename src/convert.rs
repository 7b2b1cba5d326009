//! One-shot conversion: read, normalize, write.

use std::io::Write;
use std::path::PathBuf;

use tracing::warn;

use crate::error::ConvertResult;
use crate::ingestion::{ConvertOptions, InputFormat, ingest_from_path};
use crate::output::emit;

/// Summary of a finished conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Format the input was read as.
    pub format: InputFormat,
    /// Number of rows written.
    pub rows: usize,
    /// File written, or `None` when the rows went to the console.
    pub written: Option<PathBuf>,
}

/// An owned conversion job: input path, optional output prefix, options.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Path to the `.csv`/`.xlsx`/`.xls` input.
    pub input: PathBuf,
    /// Output prefix; `-<format>.json` is appended. `None` prints to the console.
    pub output: Option<PathBuf>,
    /// Options controlling ingestion and normalization.
    pub options: ConvertOptions,
}

impl ConversionRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            options: ConvertOptions::default(),
        }
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the conversion. Rows go to `console` when no output is set.
    ///
    /// The format is checked before the input is touched, and nothing is written unless the
    /// whole input was read and normalized.
    pub fn run<W: Write>(&self, console: W) -> ConvertResult<Conversion> {
        let format = self.options.resolve_format(&self.input)?;
        if self.output.is_none() {
            warn!("No output specified, writing to console");
        }

        let options = ConvertOptions {
            format: Some(format),
            ..self.options.clone()
        };
        let rows = ingest_from_path(&self.input, &options)?;
        let written = emit(&rows, self.output.as_deref(), format, console)?;

        Ok(Conversion {
            format,
            rows: rows.len(),
            written,
        })
    }
}
