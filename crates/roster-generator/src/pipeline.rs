//! End-to-end generation: validate, build rows, serialize, optionally edit.

use chrono::Utc;
use roster_ai::{CsvEditor, build_edit_prompt, sanitize_edited_csv};
use roster_config::GeminiConfig;
use roster_models::{AI_EDITED_FILENAME, PLAIN_FILENAME, RosterArtifact, RosterRequest};
use std::time::Instant;
use tracing::{info, instrument};

use crate::GenerationSettings;
use crate::error::RosterError;
use crate::limits::validate_request;
use crate::records::generate_records;
use crate::serializer::write_roster_csv;

/// An editor plus the credential to call it with.
#[derive(Clone, Copy)]
pub struct AiEdit<'a> {
    pub editor: &'a dyn CsvEditor,
    pub api_key: &'a str,
}

impl std::fmt::Debug for AiEdit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiEdit").finish_non_exhaustive()
    }
}

/// Resolves the credential for one interaction.
///
/// A missing credential halts the interaction, with or without an
/// instruction.
pub fn resolve_credential(
    config: &GeminiConfig,
    override_key: Option<&str>,
) -> Result<String, RosterError> {
    config
        .resolve_api_key(override_key)
        .ok_or(RosterError::MissingCredential)
}

/// Builds the edit prompt a request would send, after validation.
pub fn preview_prompt(
    request: &RosterRequest,
    settings: &GenerationSettings,
) -> Result<Option<String>, RosterError> {
    validate_request(request, &settings.limits)?;
    let Some(instruction) = request.instruction_text() else {
        return Ok(None);
    };
    let records = generate_records(request, settings);
    let csv = write_roster_csv(&records, Some(instruction))?;
    Ok(Some(build_edit_prompt(&csv, instruction)))
}

/// Runs one generation.
///
/// The edited reply replaces the generated CSV; there is no retry and no
/// fallback to the unedited text.
#[instrument(skip(settings, ai), fields(vano_start = request.vano_start, vano_end = request.vano_end))]
pub async fn generate_roster(
    request: &RosterRequest,
    settings: &GenerationSettings,
    ai: Option<AiEdit<'_>>,
) -> Result<RosterArtifact, RosterError> {
    let start_time = Instant::now();
    validate_request(request, &settings.limits)?;

    let instruction = request.instruction_text();
    let records = generate_records(request, settings);
    let csv = write_roster_csv(&records, instruction)?;

    info!(
        record_count = records.len(),
        bytes = csv.len(),
        elapsed_ms = %start_time.elapsed().as_millis(),
        "Roster generated"
    );

    let Some(instruction) = instruction else {
        return Ok(RosterArtifact {
            filename: PLAIN_FILENAME.to_string(),
            content: csv,
            record_count: records.len(),
            ai_edited: false,
            generated_at: Utc::now(),
        });
    };

    let ai = ai.ok_or(RosterError::EditorUnavailable)?;
    let prompt = build_edit_prompt(&csv, instruction);
    let reply = ai.editor.edit(ai.api_key, &prompt).await?;
    let edited = sanitize_edited_csv(&reply)?;

    info!(
        record_count = records.len(),
        edited_bytes = edited.len(),
        elapsed_ms = %start_time.elapsed().as_millis(),
        "Roster edited by AI"
    );

    Ok(RosterArtifact {
        filename: AI_EDITED_FILENAME.to_string(),
        content: edited,
        record_count: records.len(),
        ai_edited: true,
        generated_at: Utc::now(),
    })
}
