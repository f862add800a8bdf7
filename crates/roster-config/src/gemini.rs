//! AI service configuration.
//!
//! # Environment Variables
//!
//! - `GOOGLE_API_KEY`: Default API credential (no default)
//! - `GEMINI_MODEL`: Model name (default: `gemini-2.5-flash-lite`)
//! - `GEMINI_API_BASE`: API base URL (default: `https://generativelanguage.googleapis.com`)
//! - `GEMINI_TIMEOUT_SECS`: Request timeout in seconds (default: `60`)

use std::env;
use std::fmt;

use crate::parse_or;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    /// Server-side credential used when the caller supplies none.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_key: lookup("GOOGLE_API_KEY")
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            model: lookup("GEMINI_MODEL")
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: lookup("GEMINI_API_BASE")
                .map(|u| u.trim().trim_end_matches('/').to_string())
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            timeout_secs: parse_or(&lookup, "GEMINI_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Picks the credential for one interaction: a non-blank override wins,
    /// otherwise the configured default.
    pub fn resolve_api_key(&self, override_key: Option<&str>) -> Option<String> {
        override_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .or_else(|| self.api_key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = GeminiConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, GeminiConfig::default());
    }

    #[test]
    fn test_reads_variables() {
        let config = GeminiConfig::from_lookup(lookup_from(&[
            ("GOOGLE_API_KEY", " key-123 "),
            ("GEMINI_MODEL", "gemini-pro"),
            ("GEMINI_API_BASE", "http://localhost:9000/"),
            ("GEMINI_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("key-123"));
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_blank_key_is_absent() {
        let config = GeminiConfig::from_lookup(lookup_from(&[("GOOGLE_API_KEY", "  ")]));
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let config = GeminiConfig::from_lookup(lookup_from(&[("GEMINI_TIMEOUT_SECS", "soon")]));
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_resolve_api_key_prefers_override() {
        let config = GeminiConfig::default().with_api_key("server-key");
        assert_eq!(
            config.resolve_api_key(Some(" user-key ")).as_deref(),
            Some("user-key")
        );
        assert_eq!(config.resolve_api_key(Some("   ")).as_deref(), Some("server-key"));
        assert_eq!(config.resolve_api_key(None).as_deref(), Some("server-key"));
        assert_eq!(GeminiConfig::default().resolve_api_key(None), None);
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GeminiConfig::default().with_api_key("super-secret");
        let debug_str = format!("{:?}", config);
        assert!(!debug_str.contains("super-secret"));
        assert!(debug_str.contains("<redacted>"));
    }
}
