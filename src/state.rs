use std::sync::Arc;

use roster_ai::{CsvEditor, GeminiClient};
use roster_config::{CorsConfig, GeminiConfig, RosterConfig};
use roster_generator::GenerationSettings;

#[derive(Clone)]
pub struct AppState {
    pub gemini_config: GeminiConfig,
    pub roster_config: RosterConfig,
    pub cors_config: CorsConfig,
    pub editor: Arc<dyn CsvEditor>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("gemini_config", &self.gemini_config)
            .field("roster_config", &self.roster_config)
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings::from(&self.roster_config)
    }
}

pub fn init_app_state() -> anyhow::Result<AppState> {
    let gemini_config = GeminiConfig::from_env();
    let editor = GeminiClient::from_config(&gemini_config)?;

    Ok(AppState {
        gemini_config,
        roster_config: RosterConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        editor: Arc::new(editor),
    })
}
