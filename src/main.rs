//! tabular-json CLI.
//!
//! `tabular-json <input-path> [output-path] [array-keys]`

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tabular_json::convert::ConversionRequest;
use tabular_json::ingestion::{ConvertOptions, TracingObserver};
use tabular_json::normalize::{ArrayKeySet, EmptyKeyPolicy, NormalizeOptions};
use tabular_json::{ConvertError, ConvertResult, ErrorKind};
use tracing::info;

mod cli;
mod logging;

use crate::cli::{Cli, LogFormatArg};
use crate::logging::{LogConfig, LogFormat, init_logging};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version go to stdout with a success status.
        Err(error) if !error.use_stderr() => error.exit(),
        Err(error) => {
            let _ = error.print();
            return ExitCode::FAILURE;
        }
    };
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            match error.kind() {
                ErrorKind::Usage => eprintln!("{error}"),
                ErrorKind::Read | ErrorKind::Write => eprintln!("error: {error}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> ConvertResult<()> {
    let input = cli.input.as_ref().ok_or_else(|| ConvertError::Usage {
        message: "Missing input path".to_string(),
    })?;

    let normalize = NormalizeOptions {
        array_keys: cli
            .array_keys
            .as_deref()
            .map(ArrayKeySet::parse)
            .unwrap_or_default(),
        empty_keys: if cli.reject_empty_keys {
            EmptyKeyPolicy::Reject
        } else {
            EmptyKeyPolicy::Allow
        },
    };
    let mut request = ConversionRequest::new(input).with_options(ConvertOptions {
        format: None,
        normalize,
        observer: Some(Arc::new(TracingObserver)),
    });
    if let Some(output) = &cli.output {
        request = request.with_output(output);
    }

    let done = request.run(io::stdout().lock())?;
    if let Some(path) = &done.written {
        info!(path = %path.display(), rows = done.rows, "wrote output");
    }
    Ok(())
}

/// Build logging configuration from CLI flags; `RUST_LOG` applies only without -v/-q.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
    }
}
