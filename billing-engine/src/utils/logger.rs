//! Logging Infrastructure
//!
//! Structured logging setup for development and production runs.

use std::path::Path;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None, None);
}

/// Initialize the logger with optional JSON formatting and file output
///
/// File output rolls daily and is only enabled when `log_dir` exists.
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = log_dir
        .map(Path::new)
        .filter(|p| p.exists())
        .and_then(|p| p.to_str())
        .map(|dir| tracing_appender::rolling::daily(dir, "billing-engine"));

    match (json.unwrap_or(false), file_appender) {
        (true, Some(writer)) => subscriber.json().with_writer(writer).init(),
        (true, None) => subscriber.json().init(),
        (false, Some(writer)) => subscriber.with_writer(writer).init(),
        (false, None) => subscriber.init(),
    }
}
