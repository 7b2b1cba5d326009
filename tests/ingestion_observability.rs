use std::sync::{Arc, Mutex};

use tabular_json::ingestion::{
    ConversionContext, ConversionObserver, ConversionStats, ConvertOptions, InputFormat, TracingObserver,
    ingest_from_path,
};
use tabular_json::{ConvertError, ErrorKind};

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<(InputFormat, usize)>>,
    failures: Mutex<Vec<ErrorKind>>,
}

impl ConversionObserver for RecordingObserver {
    fn on_success(&self, ctx: &ConversionContext, stats: ConversionStats) {
        self.successes.lock().unwrap().push((ctx.format, stats.rows));
    }

    fn on_failure(&self, _ctx: &ConversionContext, kind: ErrorKind, _error: &ConvertError) {
        self.failures.lock().unwrap().push(kind);
    }
}

fn options_with(obs: Arc<RecordingObserver>) -> ConvertOptions {
    ConvertOptions {
        observer: Some(obs),
        ..Default::default()
    }
}

#[test]
fn observer_receives_row_count_on_success() {
    let obs = Arc::new(RecordingObserver::default());
    let rows = ingest_from_path("tests/fixtures/people.csv", &options_with(obs.clone())).unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(*obs.successes.lock().unwrap(), vec![(InputFormat::Csv, 3)]);
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_read_failure_for_missing_file() {
    let obs = Arc::new(RecordingObserver::default());
    let _ = ingest_from_path("tests/fixtures/does_not_exist.csv", &options_with(obs.clone())).unwrap_err();

    assert_eq!(*obs.failures.lock().unwrap(), vec![ErrorKind::Read]);
    assert!(obs.successes.lock().unwrap().is_empty());
}

#[test]
fn unsupported_format_fails_before_observer_context_exists() {
    let obs = Arc::new(RecordingObserver::default());
    let err = ingest_from_path("tests/fixtures/notes.txt", &options_with(obs.clone())).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Usage);
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn tracing_observer_is_silent_without_subscriber() {
    let opts = ConvertOptions {
        observer: Some(Arc::new(TracingObserver)),
        ..Default::default()
    };
    assert!(ingest_from_path("tests/fixtures/people.csv", &opts).is_ok());
    assert!(ingest_from_path("tests/fixtures/missing.csv", &opts).is_err());
}
