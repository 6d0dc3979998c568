use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Default console filter when `RUST_LOG` is unset.
const DEFAULT_CONSOLE_FILTER: &str = "info,trend_pipeline=info,trend_config=info";

/// File log keeps per-stage detail.
const FILE_FILTER: &str = "info,trend_pipeline=debug,trend_config=debug";

/// Install the global subscriber: a console layer on stderr plus a daily rolling file
/// under `log_dir`.
///
/// Keep the returned guard alive for the life of the process so buffered file
/// output is flushed.
pub fn configure_logging(log_dir: &Path) -> WorkerGuard {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_CONSOLE_FILTER));
    let console_log = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    let file_appender = rolling::daily(log_dir, "news-trends.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    let file_log = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_filter(EnvFilter::new(FILE_FILTER));

    tracing_subscriber::Registry::default()
        .with(console_log)
        .with(file_log)
        .init();

    guard
}
