//! # Roster Generator
//!
//! Builds VANO rosters: batch-limit validation, record generation, CSV
//! serialization and the optional AI edit.
//!
//! ## Usage
//!
//! ```ignore
//! use roster_generator::{GenerationSettings, generate_roster};
//!
//! let settings = GenerationSettings::from(&RosterConfig::from_env());
//! let request = RosterRequest::new(1, 3, "BSC", Role::Student);
//! let artifact = generate_roster(&request, &settings, None).await?;
//! ```

pub mod error;
pub mod limits;
pub mod pipeline;
pub mod records;
pub mod serializer;

use roster_config::RosterConfig;
use roster_config::roster::DEFAULT_EMAIL_DOMAIN;
use roster_core::DEFAULT_PASSWORD_LENGTH;

pub use error::RosterError;
pub use limits::{BatchLimits, validate_request};
pub use pipeline::{AiEdit, generate_roster, preview_prompt, resolve_credential};
pub use records::generate_records;
pub use serializer::write_roster_csv;

/// Everything generation needs besides the request itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationSettings {
    pub email_domain: String,
    pub password_length: usize,
    pub limits: BatchLimits,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
            password_length: DEFAULT_PASSWORD_LENGTH,
            limits: BatchLimits::default(),
        }
    }
}

impl From<&RosterConfig> for GenerationSettings {
    fn from(config: &RosterConfig) -> Self {
        Self {
            email_domain: config.email_domain.clone(),
            password_length: config.password_length,
            limits: BatchLimits::from(config),
        }
    }
}
