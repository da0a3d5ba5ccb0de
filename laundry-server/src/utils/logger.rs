//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() -> Option<WorkerGuard> {
    init_logger_with_file(None, None, None)
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` wins over `log_level` when set. The returned guard must be kept
/// alive for the lifetime of the process when file output is enabled.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    json: Option<bool>,
    log_dir: Option<&str>,
) -> Option<WorkerGuard> {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let json = json.unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "laundry-server");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            let builder = builder.with_writer(writer).with_ansi(false);
            let result = if json {
                builder.json().try_init()
            } else {
                builder.try_init()
            };
            if result.is_err() {
                eprintln!("Logger already initialized");
            }
            return Some(guard);
        }
    }

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if result.is_err() {
        eprintln!("Logger already initialized");
    }
    None
}
