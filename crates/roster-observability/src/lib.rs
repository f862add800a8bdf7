//! Roster Observability
//!
//! Tracing subscriber setup shared by the HTTP service and the CLI.
//!
//! - [`init_basic_console_logging`]: compact console output on stderr, used by
//!   the CLI and whenever file logging is compiled out
//! - [`init_tracing`]: console plus rolling error and JSON log files under
//!   `LOG_DIR` (requires the `observability` feature)
//!
//! # Features
//!
//! - `observability` (default): enables the rolling file layers
//!
//! # Examples
//!
//! ```no_run
//! use roster_observability::init_tracing;
//!
//! init_tracing("vano_roster");
//! tracing::info!("ready");
//! ```

pub mod basic_logging;
#[cfg(feature = "observability")]
pub mod logging;

pub use basic_logging::{default_filter, init_basic_console_logging};

#[cfg(feature = "observability")]
pub use logging::init_tracing;

/// Falls back to console-only logging when file logging is compiled out.
#[cfg(not(feature = "observability"))]
pub fn init_tracing(crate_name: &str) {
    init_basic_console_logging(crate_name);
}
