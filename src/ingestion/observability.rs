use std::path::PathBuf;

use tracing::{error, info};

use crate::error::{ConvertError, ErrorKind};

use super::unified::InputFormat;

/// Context about an ingestion attempt.
#[derive(Debug, Clone)]
pub struct ConversionContext {
    /// The input path used for ingestion.
    pub path: PathBuf,
    /// Format used for ingestion.
    pub format: InputFormat,
}

/// Minimal stats reported on successful ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionStats {
    /// Number of normalized rows.
    pub rows: usize,
}

/// Observer interface for ingestion outcomes.
///
/// Implementors can record metrics or logs.
pub trait ConversionObserver: Send + Sync {
    /// Called when ingestion succeeds.
    fn on_success(&self, _ctx: &ConversionContext, _stats: ConversionStats) {}

    /// Called when ingestion fails.
    fn on_failure(&self, _ctx: &ConversionContext, _kind: ErrorKind, _error: &ConvertError) {}
}

/// Emits ingestion events as `tracing` events.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl ConversionObserver for TracingObserver {
    fn on_success(&self, ctx: &ConversionContext, stats: ConversionStats) {
        info!(
            format = %ctx.format,
            path = %ctx.path.display(),
            rows = stats.rows,
            "ingested input"
        );
    }

    fn on_failure(&self, ctx: &ConversionContext, kind: ErrorKind, error: &ConvertError) {
        error!(
            format = %ctx.format,
            path = %ctx.path.display(),
            kind = ?kind,
            err = %error,
            "ingestion failed"
        );
    }
}
