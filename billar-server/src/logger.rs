//! Logging Infrastructure
//!
//! Structured logging on stdout, optionally mirrored to a daily rolling file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

const LOG_FILE_PREFIX: &str = "billar-server";

/// Initialize the logger
///
/// `RUST_LOG` wins over `log_level` when set. The returned guard flushes the
/// file writer and must be held until shutdown.
pub fn init_logger_with_file(log_level: &str, log_dir: Option<&str>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if std::fs::create_dir_all(log_path).is_ok() {
            let file_appender = tracing_appender::rolling::daily(log_path, LOG_FILE_PREFIX);
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
            builder
                .with_writer(std::io::stdout.and(file_writer))
                .init();
            return Some(guard);
        }
        eprintln!("Log directory {dir} is not writable, logging to stdout only");
    }

    builder.init();
    None
}
