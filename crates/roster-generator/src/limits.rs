//! Batch-size policy.
//!
//! Checked in order, first failure wins:
//!
//! 1. the range must not be inverted or empty (`start < end`)
//! 2. without an instruction, at most `max_users` rows
//! 3. with an instruction, at most `max_ai_users` rows (the AI service's
//!    input size is the bound)

use roster_config::RosterConfig;
use roster_config::roster::{DEFAULT_MAX_AI_USERS, DEFAULT_MAX_USERS};
use roster_models::{BatchLimitsResponse, RosterRequest};
use validator::{Validate, ValidationErrors};

use crate::error::RosterError;

pub const RANGE_INVERTED_MESSAGE: &str = "Starting value must be smaller than ending value.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchLimits {
    pub max_users: u64,
    pub max_ai_users: u64,
}

impl Default for BatchLimits {
    fn default() -> Self {
        Self {
            max_users: DEFAULT_MAX_USERS,
            max_ai_users: DEFAULT_MAX_AI_USERS,
        }
    }
}

impl From<&RosterConfig> for BatchLimits {
    fn from(config: &RosterConfig) -> Self {
        Self {
            max_users: config.max_users,
            max_ai_users: config.max_ai_users,
        }
    }
}

impl BatchLimits {
    pub fn too_many_users_message(&self) -> String {
        format!(
            "You can only generate up to {} users in one batch without AI.",
            group_thousands(self.max_users)
        )
    }

    pub fn too_many_ai_users_message(&self) -> String {
        format!(
            "AI editing only supports up to {} users in one batch.",
            group_thousands(self.max_ai_users)
        )
    }

    /// Applies the batch policy to a request.
    pub fn check(&self, request: &RosterRequest) -> Result<(), RosterError> {
        if request.vano_start >= request.vano_end {
            return Err(RosterError::Validation(RANGE_INVERTED_MESSAGE.to_string()));
        }

        let user_count = request.user_count();
        match request.instruction_text() {
            None if user_count > self.max_users => {
                Err(RosterError::Validation(self.too_many_users_message()))
            }
            Some(_) if user_count > self.max_ai_users => {
                Err(RosterError::Validation(self.too_many_ai_users_message()))
            }
            _ => Ok(()),
        }
    }

    pub fn to_response(&self, password_length: usize, email_domain: &str) -> BatchLimitsResponse {
        BatchLimitsResponse {
            max_users: self.max_users,
            max_ai_users: self.max_ai_users,
            password_length,
            email_domain: email_domain.to_string(),
        }
    }
}

/// Joins validator messages into one line.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

/// Field rules first, then the batch policy.
pub fn validate_request(request: &RosterRequest, limits: &BatchLimits) -> Result<(), RosterError> {
    request
        .validate()
        .map_err(|errors| RosterError::Validation(format_validation_errors(&errors)))?;
    limits.check(request)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_models::Role;

    fn message(result: Result<(), RosterError>) -> String {
        match result {
            Err(RosterError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_range_rejected() {
        let limits = BatchLimits::default();
        let request = RosterRequest::new(5, 3, "BSC", Role::Student);
        assert_eq!(message(limits.check(&request)), RANGE_INVERTED_MESSAGE);
    }

    #[test]
    fn test_equal_bounds_rejected() {
        let limits = BatchLimits::default();
        let request = RosterRequest::new(4, 4, "BSC", Role::Student);
        assert_eq!(message(limits.check(&request)), RANGE_INVERTED_MESSAGE);
    }

    #[test]
    fn test_plain_ceiling() {
        let limits = BatchLimits::default();
        assert!(limits
            .check(&RosterRequest::new(1, 50_000, "BSC", Role::Student))
            .is_ok());
        assert_eq!(
            message(limits.check(&RosterRequest::new(1, 50_001, "BSC", Role::Student))),
            "You can only generate up to 50,000 users in one batch without AI."
        );
        assert!(limits
            .check(&RosterRequest::new(1, 60_000, "BSC", Role::Student))
            .is_err());
    }

    #[test]
    fn test_ai_ceiling() {
        let limits = BatchLimits::default();
        let ok = RosterRequest::new(1, 290, "BSC", Role::Student).with_instruction("drop 7");
        assert!(limits.check(&ok).is_ok());

        let too_many =
            RosterRequest::new(1, 300, "BSC", Role::Student).with_instruction("exclude user 150");
        assert_eq!(
            message(limits.check(&too_many)),
            "AI editing only supports up to 290 users in one batch."
        );
    }

    #[test]
    fn test_blank_instruction_uses_plain_ceiling() {
        let limits = BatchLimits::default();
        let request = RosterRequest::new(1, 300, "BSC", Role::Student).with_instruction("   ");
        assert!(limits.check(&request).is_ok());
    }

    #[test]
    fn test_inversion_wins_over_size() {
        let limits = BatchLimits::default();
        let request = RosterRequest::new(70_000, 1, "BSC", Role::Student).with_instruction("x");
        assert_eq!(message(limits.check(&request)), RANGE_INVERTED_MESSAGE);
    }

    #[test]
    fn test_validate_request_runs_field_rules() {
        let limits = BatchLimits::default();
        let request = RosterRequest::new(0, 3, "BSC", Role::Student);
        assert_eq!(
            message(validate_request(&request, &limits)),
            "VANO starting number must be at least 1"
        );
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(290), "290");
        assert_eq!(group_thousands(50_000), "50,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
