//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "tabular-json",
    version,
    about = "Convert a CSV or spreadsheet file into a normalized JSON array",
    long_about = "Convert a CSV or spreadsheet file into a normalized JSON array.\n\n\
                  Column labels become camelCase keys, numbers and true/false become typed \
                  JSON values, and the listed array keys are always emitted as lists.\n\
                  The result is written to <OUTPUT>-<format>.json, or printed when no \
                  OUTPUT is given."
)]
pub struct Cli {
    /// Input file (.csv, .xlsx or .xls).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output path prefix; `-<format>.json` is appended. Printed to stdout when omitted.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Comma-separated canonical keys whose values are always lists (e.g. "tags,roles").
    #[arg(value_name = "ARRAY_KEYS")]
    pub array_keys: Option<String>,

    /// Fail when a column label normalizes to an empty key (e.g. "#").
    #[arg(long = "reject-empty-keys")]
    pub reject_empty_keys: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "compact")]
    pub log_format: LogFormatArg,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
