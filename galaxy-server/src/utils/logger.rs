//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production
//! environments:
//! - Pretty console output for development, JSON for production
//! - Optional daily rotating log files

use std::fs;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, prelude::*};

/// Initialize the logging system (console only)
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}

/// Initialize the logging system with optional daily rotating file output
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn")
/// * `json_format` - Whether to use JSON format (true for production, false for development)
/// * `log_dir` - Optional directory for file logging (e.g., Some("./logs"))
///
/// RUST_LOG takes precedence over `level` when set, so individual targets
/// like `http_access` or `sqlx` can be tuned without a config change.
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json_format {
        let console_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_filter(EnvFilter::new(level));

        if let Some(dir) = log_dir {
            let file_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_writer(std::sync::Mutex::new(daily_appender(dir)?))
                .with_filter(EnvFilter::new(level));

            subscriber.with(console_layer).with(file_layer).init();
        } else {
            subscriber.with(console_layer).init();
        }
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_filter(EnvFilter::new(level));

        if let Some(dir) = log_dir {
            let file_layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(daily_appender(dir)?))
                .with_filter(EnvFilter::new(level));

            subscriber.with(console_layer).with(file_layer).init();
        } else {
            subscriber.with(console_layer).init();
        }
    }

    Ok(())
}

/// Create the log directory if needed and return a daily rolling appender
/// writing `galaxy-YYYY-MM-DD.log` files.
fn daily_appender(dir: &str) -> anyhow::Result<RollingFileAppender> {
    let log_dir = Path::new(dir);
    fs::create_dir_all(log_dir)?;
    Ok(RollingFileAppender::new(Rotation::DAILY, log_dir, "galaxy"))
}
