//! Request and response DTOs for roster generation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::roles::Role;

/// Download name of a roster generated without AI editing.
pub const PLAIN_FILENAME: &str = "user_list.csv";
/// Download name of a roster edited by the AI service.
pub const AI_EDITED_FILENAME: &str = "user_list_ai.csv";

fn default_department() -> String {
    "BSC".to_string()
}

/// Inputs of one roster generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct RosterRequest {
    /// First VANO of the range (inclusive)
    #[validate(range(min = 1, message = "VANO starting number must be at least 1"))]
    #[schema(example = 1)]
    pub vano_start: u64,
    /// Last VANO of the range (inclusive)
    #[validate(range(min = 1, message = "VANO ending number must be at least 1"))]
    #[schema(example = 3)]
    pub vano_end: u64,
    #[serde(default = "default_department")]
    #[validate(length(
        min = 1,
        max = 100,
        message = "Department must be between 1 and 100 characters"
    ))]
    #[schema(example = "BSC")]
    pub department: String,
    #[serde(default)]
    pub role: Role,
    /// Free-text edit applied to the generated CSV by the AI service
    #[serde(default)]
    #[validate(length(max = 2000, message = "Instruction must be at most 2000 characters"))]
    #[schema(example = "don't add user 2")]
    pub instruction: Option<String>,
}

impl RosterRequest {
    pub fn new(vano_start: u64, vano_end: u64, department: impl Into<String>, role: Role) -> Self {
        Self {
            vano_start,
            vano_end,
            department: department.into(),
            role,
            instruction: None,
        }
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    /// The trimmed instruction, or `None` when absent or blank.
    ///
    /// A blank instruction writes no `#` comment row and never reaches the AI.
    pub fn instruction_text(&self) -> Option<&str> {
        self.instruction
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Number of users in `[vano_start, vano_end]`; zero for an inverted range.
    pub fn user_count(&self) -> u64 {
        if self.vano_end < self.vano_start {
            return 0;
        }
        self.vano_end - self.vano_start + 1
    }
}

/// Final output of one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterArtifact {
    pub filename: String,
    pub content: String,
    /// Rows generated before any AI edit
    pub record_count: usize,
    pub ai_edited: bool,
    pub generated_at: DateTime<Utc>,
}

/// JSON preview of a generated roster.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RosterPreviewResponse {
    #[schema(example = "user_list.csv")]
    pub filename: String,
    pub record_count: usize,
    pub ai_edited: bool,
    pub generated_at: DateTime<Utc>,
    pub csv: String,
}

impl From<RosterArtifact> for RosterPreviewResponse {
    fn from(artifact: RosterArtifact) -> Self {
        Self {
            filename: artifact.filename,
            record_count: artifact.record_count,
            ai_edited: artifact.ai_edited,
            generated_at: artifact.generated_at,
            csv: artifact.content,
        }
    }
}

/// Active generation limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BatchLimitsResponse {
    #[schema(example = 50000)]
    pub max_users: u64,
    #[schema(example = 290)]
    pub max_ai_users: u64,
    #[schema(example = 10)]
    pub password_length: usize,
    #[schema(example = "velsrscollege.com")]
    pub email_domain: String,
}
