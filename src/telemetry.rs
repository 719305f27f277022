//! Structured JSON logging.
//!
//! One record per line, fields flattened to the top level:
//! `{"timestamp":..,"level":"ERROR","message":..,"cause":..,"filename":..,"line_number":..}`

use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::LogConfig;

/// Logger setup errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level directive: {0}")]
    Filter(#[from] ParseError),
    #[error("logger already installed: {0}")]
    Install(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Build a JSON subscriber writing to `writer`.
pub fn json_subscriber<W>(
    config: &LogConfig,
    writer: W,
) -> Result<impl Subscriber + Send + Sync + use<W>, TelemetryError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(&config.level)?;

    Ok(tracing_subscriber::fmt()
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_target(config.target)
        .with_env_filter(filter)
        .with_writer(writer)
        .finish())
}

/// Install the process-wide logger on stdout.
///
/// Must run before the first log call. Only the first call succeeds.
pub fn init(config: &LogConfig) -> Result<(), TelemetryError> {
    let subscriber = json_subscriber(config, std::io::stdout)?;
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// In-memory log capture for tests.
#[cfg(test)]
pub(crate) mod capture {
    use std::io;
    use std::sync::Arc;

    use parking_lot::Mutex;
    use serde_json::Value;
    use tracing_subscriber::fmt::MakeWriter;

    use crate::config::LogConfig;

    /// Shared byte buffer handed to the subscriber as its writer.
    #[derive(Clone, Default)]
    pub struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Buffer {
        type Writer = Buffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    impl Buffer {
        /// Parse every captured line as a JSON record.
        pub fn records(&self) -> Vec<Value> {
            let bytes = self.0.lock();
            String::from_utf8_lossy(&bytes)
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| serde_json::from_str(line).expect("log line is JSON"))
                .collect()
        }
    }

    /// Run `f` with a JSON subscriber scoped to the current thread.
    pub fn with_records<R>(config: &LogConfig, f: impl FnOnce() -> R) -> (R, Vec<Value>) {
        let buffer = Buffer::default();
        let subscriber =
            super::json_subscriber(config, buffer.clone()).expect("valid test log config");
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, buffer.records())
    }
}
