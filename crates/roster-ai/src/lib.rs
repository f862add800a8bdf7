//! # Roster AI
//!
//! Natural-language editing of generated rosters through a generative-AI
//! text endpoint.
//!
//! - [`prompt`]: The fixed prompt wrapping the CSV and the instruction
//! - [`gemini`]: Gemini `generateContent` REST client
//! - [`sanitize`]: Unwrapping and checking the model's reply
//!
//! # Example
//!
//! ```ignore
//! use roster_ai::{CsvEditor, GeminiClient, build_edit_prompt, sanitize_edited_csv};
//!
//! let client = GeminiClient::from_config(&GeminiConfig::from_env())?;
//! let prompt = build_edit_prompt(&csv, "don't add user 610");
//! let edited = sanitize_edited_csv(&client.edit(&api_key, &prompt).await?)?;
//! ```

pub mod error;
pub mod gemini;
pub mod prompt;
pub mod sanitize;

use async_trait::async_trait;

pub use error::AiError;
pub use gemini::GeminiClient;
pub use prompt::build_edit_prompt;
pub use sanitize::sanitize_edited_csv;

/// A text-to-text service that rewrites a roster according to a prompt.
#[async_trait]
pub trait CsvEditor: Send + Sync {
    /// Sends `prompt` and returns the raw reply text.
    async fn edit(&self, api_key: &str, prompt: &str) -> Result<String, AiError>;
}
