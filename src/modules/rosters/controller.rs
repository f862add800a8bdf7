use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderName, header},
    response::{IntoResponse, Response},
};
use anyhow::anyhow;
use tracing::instrument;

use roster_core::AppError;

use crate::modules::rosters::model::{
    AI_EDITED_HEADER, API_KEY_HEADER, BatchLimitsResponse, ErrorResponse, RECORD_COUNT_HEADER,
    RosterPreviewResponse, RosterRequest,
};
use crate::modules::rosters::service::RosterService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Reads the credential override; an unreadable header is rejected rather
/// than falling back to the server key.
fn api_key_override(headers: &HeaderMap) -> Result<Option<&str>, AppError> {
    headers
        .get(API_KEY_HEADER)
        .map(|value| {
            value.to_str().map_err(|_| {
                AppError::bad_request(anyhow!(
                    "{} header must be visible ASCII",
                    API_KEY_HEADER
                ))
            })
        })
        .transpose()
}

/// Generate a roster and download it as CSV
#[utoipa::path(
    post,
    path = "/api/rosters",
    request_body = RosterRequest,
    params(
        ("x-gemini-api-key" = Option<String>, Header, description = "Overrides the server's Gemini API key")
    ),
    responses(
        (status = 200, description = "CSV attachment", content_type = "text/csv", body = String),
        (status = 400, description = "Malformed request body or API key header", body = ErrorResponse),
        (status = 401, description = "No Gemini API key available", body = ErrorResponse),
        (status = 422, description = "Range or batch size rejected", body = ErrorResponse),
        (status = 502, description = "AI edit failed", body = ErrorResponse)
    ),
    tag = "Rosters"
)]
#[instrument(skip(state, headers))]
pub async fn download_roster(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(request): ValidatedJson<RosterRequest>,
) -> Result<Response, AppError> {
    let artifact =
        RosterService::generate(&state, &request, api_key_override(&headers)?).await?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "text/csv; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", artifact.filename),
            ),
            (
                HeaderName::from_static(RECORD_COUNT_HEADER),
                artifact.record_count.to_string(),
            ),
            (
                HeaderName::from_static(AI_EDITED_HEADER),
                artifact.ai_edited.to_string(),
            ),
        ],
        artifact.content,
    )
        .into_response())
}

/// Generate a roster and return it inline for preview
#[utoipa::path(
    post,
    path = "/api/rosters/preview",
    request_body = RosterRequest,
    params(
        ("x-gemini-api-key" = Option<String>, Header, description = "Overrides the server's Gemini API key")
    ),
    responses(
        (status = 200, description = "Generated roster", body = RosterPreviewResponse),
        (status = 400, description = "Malformed request body or API key header", body = ErrorResponse),
        (status = 401, description = "No Gemini API key available", body = ErrorResponse),
        (status = 422, description = "Range or batch size rejected", body = ErrorResponse),
        (status = 502, description = "AI edit failed", body = ErrorResponse)
    ),
    tag = "Rosters"
)]
#[instrument(skip(state, headers))]
pub async fn preview_roster(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(request): ValidatedJson<RosterRequest>,
) -> Result<Json<RosterPreviewResponse>, AppError> {
    let artifact =
        RosterService::generate(&state, &request, api_key_override(&headers)?).await?;

    Ok(Json(artifact.into()))
}

/// Active batch limits and generation settings
#[utoipa::path(
    get,
    path = "/api/rosters/limits",
    responses(
        (status = 200, description = "Active limits", body = BatchLimitsResponse)
    ),
    tag = "Rosters"
)]
pub async fn get_limits(State(state): State<AppState>) -> Json<BatchLimitsResponse> {
    Json(RosterService::limits(&state))
}
