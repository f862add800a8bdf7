use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use roster_ai::{AiError, CsvEditor};
use roster_config::{CorsConfig, GeminiConfig, RosterConfig};
use vano_roster::router::init_router;
use vano_roster::state::AppState;

pub const TEST_API_KEY: &str = "test-gemini-key";

/// Editor that records every call and answers with a fixed reply.
pub struct StubEditor {
    reply: String,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl StubEditor {
    pub fn replying(reply: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.into(),
            calls: Mutex::new(Vec::new()),
        })
    }

    #[allow(dead_code)]
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    #[allow(dead_code)]
    pub fn last_call(&self) -> Option<(String, String)> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CsvEditor for StubEditor {
    async fn edit(&self, api_key: &str, prompt: &str) -> Result<String, AiError> {
        self.calls
            .lock()
            .unwrap()
            .push((api_key.to_string(), prompt.to_string()));
        Ok(self.reply.clone())
    }
}

/// Builds the router around default configs and the given editor.
///
/// `api_key` plays the role of GOOGLE_API_KEY.
pub fn setup_test_app(editor: Arc<StubEditor>, api_key: Option<&str>) -> axum::Router {
    let gemini_config = match api_key {
        Some(key) => GeminiConfig::default().with_api_key(key),
        None => GeminiConfig::default(),
    };

    let state = AppState {
        gemini_config,
        roster_config: RosterConfig::default(),
        cors_config: CorsConfig::default(),
        editor,
    };
    init_router(state)
}

/// Splits a CSV body into its lines, dropping the trailing empty one.
#[allow(dead_code)]
pub fn csv_lines(body: &str) -> Vec<&str> {
    body.split("\r\n").filter(|line| !line.is_empty()).collect()
}
