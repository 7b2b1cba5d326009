//! Input readers.
//!
//! Most callers should use [`ingest_from_path`] (from [`unified`]) which:
//!
//! - auto-detects format by file extension (or you can override via [`ConvertOptions`])
//! - reads and normalizes the whole input into memory
//! - optionally reports success/failure to a [`ConversionObserver`]
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - `excel` (Cargo feature `excel`, on by default)

pub mod csv;
#[cfg(feature = "excel")]
pub mod excel;
pub mod observability;
pub mod unified;

pub use observability::{ConversionContext, ConversionObserver, ConversionStats, TracingObserver};
pub use unified::{ConvertOptions, InputFormat, ingest_from_path, unsupported_format_message};
