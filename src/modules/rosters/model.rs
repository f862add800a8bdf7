use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use roster_models::{BatchLimitsResponse, Role, RosterPreviewResponse, RosterRequest};

/// Per-request override of the server's AI credential.
pub const API_KEY_HEADER: &str = "x-gemini-api-key";
pub const RECORD_COUNT_HEADER: &str = "x-roster-record-count";
pub const AI_EDITED_HEADER: &str = "x-roster-ai-edited";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Starting value must be smaller than ending value.")]
    pub error: String,
}
