//! Generation settings.
//!
//! # Environment Variables
//!
//! - `ROSTER_EMAIL_DOMAIN`: Domain of generated emails (default: `velsrscollege.com`)
//! - `ROSTER_PASSWORD_LENGTH`: Generated password length (default: `10`)
//! - `ROSTER_MAX_USERS`: Largest batch without AI editing (default: `50000`)
//! - `ROSTER_MAX_AI_USERS`: Largest batch with AI editing (default: `290`)

use std::env;

use roster_core::DEFAULT_PASSWORD_LENGTH;

use crate::parse_or;

pub const DEFAULT_EMAIL_DOMAIN: &str = "velsrscollege.com";
pub const DEFAULT_MAX_USERS: u64 = 50_000;
/// Bounded by the AI service's input size.
pub const DEFAULT_MAX_AI_USERS: u64 = 290;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterConfig {
    pub email_domain: String,
    pub password_length: usize,
    pub max_users: u64,
    pub max_ai_users: u64,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
            password_length: DEFAULT_PASSWORD_LENGTH,
            max_users: DEFAULT_MAX_USERS,
            max_ai_users: DEFAULT_MAX_AI_USERS,
        }
    }
}

impl RosterConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let password_length = parse_or(&lookup, "ROSTER_PASSWORD_LENGTH", DEFAULT_PASSWORD_LENGTH);

        Self {
            email_domain: lookup("ROSTER_EMAIL_DOMAIN")
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| DEFAULT_EMAIL_DOMAIN.to_string()),
            password_length: if password_length == 0 {
                DEFAULT_PASSWORD_LENGTH
            } else {
                password_length
            },
            max_users: parse_or(&lookup, "ROSTER_MAX_USERS", DEFAULT_MAX_USERS),
            max_ai_users: parse_or(&lookup, "ROSTER_MAX_AI_USERS", DEFAULT_MAX_AI_USERS),
        }
    }
}
