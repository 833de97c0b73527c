//! Logging bootstrap
//!
//! Console output plus a daily-rolling `tankwatch.log` file. The global
//! `RUST_LOG` env var controls the level for both layers; the log directory
//! comes from `TANKWATCH_LOG_DIR` (default `logs` under the working
//! directory).

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_FILE_NAME: &str = "tankwatch.log";

/// Guard that keeps the logging system alive.
///
/// Must be held for the duration of the application; dropping it flushes
/// buffered file output.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

fn log_dir() -> PathBuf {
    std::env::var("TANKWATCH_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("logs"))
}

/// Initialize console and file logging.
pub fn init_logging() -> Result<LoggingGuard, Box<dyn std::error::Error>> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &dir, LOG_FILE_NAME);
    let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_filter(console_filter))
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_filter(file_filter),
        )
        .try_init()?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}
