//! # Roster Config
//!
//! Configuration types for the VANO roster generator.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`gemini`]: AI service credentials, model and endpoint
//! - [`roster`]: Email domain, password length and batch ceilings
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: HTTP listen address
//!
//! # Example
//!
//! ```ignore
//! use roster_config::{CorsConfig, GeminiConfig, RosterConfig, ServerConfig};
//!
//! dotenvy::dotenv().ok();
//! let gemini_config = GeminiConfig::from_env();
//! let roster_config = RosterConfig::from_env();
//! ```

pub mod cors;
pub mod gemini;
pub mod roster;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use gemini::GeminiConfig;
pub use roster::RosterConfig;
pub use server::ServerConfig;

/// Reads a variable through `lookup` and parses it, falling back on absence
/// or parse failure.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
