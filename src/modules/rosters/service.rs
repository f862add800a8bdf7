use anyhow::anyhow;
use roster_core::AppError;
use roster_generator::{AiEdit, RosterError, generate_roster, resolve_credential};
use roster_models::{BatchLimitsResponse, RosterArtifact, RosterRequest};
use tracing::{instrument, warn};

use crate::state::AppState;

pub struct RosterService;

impl RosterService {
    /// Resolves the credential, then runs the generation pipeline.
    #[instrument(skip(state, api_key_override), fields(has_override = api_key_override.is_some()))]
    pub async fn generate(
        state: &AppState,
        request: &RosterRequest,
        api_key_override: Option<&str>,
    ) -> Result<RosterArtifact, AppError> {
        let api_key =
            resolve_credential(&state.gemini_config, api_key_override).map_err(into_app_error)?;
        let settings = state.generation_settings();

        generate_roster(
            request,
            &settings,
            Some(AiEdit {
                editor: state.editor.as_ref(),
                api_key: &api_key,
            }),
        )
        .await
        .map_err(into_app_error)
    }

    pub fn limits(state: &AppState) -> BatchLimitsResponse {
        let settings = state.generation_settings();
        settings
            .limits
            .to_response(settings.password_length, &settings.email_domain)
    }
}

/// Maps generation failures onto HTTP statuses.
pub fn into_app_error(err: RosterError) -> AppError {
    match err {
        RosterError::Validation(message) => AppError::unprocessable(anyhow!(message)),
        RosterError::MissingCredential => AppError::unauthorized(err),
        RosterError::Ai(ai_err) => {
            warn!(error = %ai_err, "AI edit failed");
            AppError::bad_gateway(ai_err)
        }
        RosterError::Csv(_) | RosterError::Encoding(_) | RosterError::EditorUnavailable => {
            AppError::internal(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use roster_ai::AiError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            into_app_error(RosterError::Validation("bad".into())).status,
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            into_app_error(RosterError::MissingCredential).status,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            into_app_error(RosterError::Ai(AiError::EmptyResponse)).status,
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            into_app_error(RosterError::EditorUnavailable).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_message_is_kept() {
        let err = into_app_error(RosterError::Validation(
            "Starting value must be smaller than ending value.".into(),
        ));
        assert_eq!(
            err.error.to_string(),
            "Starting value must be smaller than ending value."
        );
    }
}
