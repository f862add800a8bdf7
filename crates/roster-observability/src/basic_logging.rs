use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
///
/// `LOG_LEVEL` (default "info") applies to `crate_name` and the roster
/// crates; noisy dependencies are held at warn.
pub fn default_filter(crate_name: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        EnvFilter::new(format!(
            "{crate_name}={level},roster_generator={level},roster_ai={level},tower_http=warn,hyper=warn,reqwest=warn",
            level = log_level
        ))
    })
}

/// Initialize console logging on stderr.
///
/// Stdout stays free for command output such as CSV text.
pub fn init_basic_console_logging(crate_name: &str) {
    let console_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_filter(default_filter(crate_name));

    // A second init (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
