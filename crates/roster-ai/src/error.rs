/// Error type for AI editing.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("AI request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("AI service returned no text")]
    EmptyResponse,

    #[error("AI response is not a valid roster CSV: {0}")]
    MalformedCsv(String),
}
