//! `tabular-json` converts a CSV file or the first sheet of a workbook into a normalized JSON
//! array.
//!
//! Every row goes through the same normalization:
//!
//! - column labels become camelCase keys (`"First Name"` -> `"firstName"`, `"ID#"` -> `"id"`)
//! - values are trimmed and typed: integers and decimals become numbers, `"true"`/`"false"`
//!   become booleans, anything else stays a string
//! - keys listed in an [`normalize::ArrayKeySet`] always become lists (strings are split on
//!   commas)
//!
//! ## Inputs (auto-detected by extension)
//!
//! - **CSV**: `.csv` (header row required, empty lines skipped)
//! - **Workbooks** (Cargo feature `excel`, on by default): `.xlsx`, `.xls`; first sheet only
//!
//! ## Quick example
//!
//! ```no_run
//! use tabular_json::convert::ConversionRequest;
//! use tabular_json::ingestion::ConvertOptions;
//! use tabular_json::normalize::{ArrayKeySet, NormalizeOptions};
//!
//! # fn main() -> Result<(), tabular_json::ConvertError> {
//! let options = ConvertOptions {
//!     normalize: NormalizeOptions {
//!         array_keys: ArrayKeySet::parse("tags, roles"),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! // Writes out/people-csv.json
//! let done = ConversionRequest::new("people.csv")
//!     .with_output("out/people")
//!     .with_options(options)
//!     .run(std::io::stdout())?;
//! println!("rows={}", done.rows);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: format detection and the CSV / spreadsheet readers
//! - [`normalize`]: key normalization, type coercion, array fields
//! - [`output`]: JSON output to a file or the console
//! - [`convert`]: the whole read -> normalize -> write job
//! - [`types`]: raw and normalized row types
//! - [`error`]: error types

pub mod convert;
pub mod error;
pub mod ingestion;
pub mod normalize;
pub mod output;
pub mod types;

pub use error::{ConvertError, ConvertResult, ErrorKind};
