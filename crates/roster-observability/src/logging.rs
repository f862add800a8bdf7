use std::fs;

use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::basic_logging::{default_filter, init_basic_console_logging};

/// Console logging plus rolling files in `LOG_DIR` (default "logs"):
/// `<crate_name>.log` for errors and `<crate_name>.json` for structured
/// info-level events.
pub fn init_tracing(crate_name: &str) {
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

    if let Err(e) = fs::create_dir_all(&log_dir) {
        init_basic_console_logging(crate_name);
        warn!(log_dir = %log_dir, error = %e, "Cannot create log directory, file logging disabled");
        return;
    }

    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(default_filter(crate_name));

    let file_appender =
        RollingFileAppender::new(Rotation::DAILY, &log_dir, format!("{crate_name}.log"));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_filter(EnvFilter::new("error"));

    // Structured logs for ingestion
    let json_appender =
        RollingFileAppender::new(Rotation::DAILY, &log_dir, format!("{crate_name}.json"));

    let json_layer = fmt::layer()
        .json()
        .with_writer(json_appender)
        .with_current_span(true)
        .with_span_list(true)
        .with_filter(EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(json_layer)
        .try_init();

    info!(log_dir = %log_dir, "Tracing initialized with file logging");
}
