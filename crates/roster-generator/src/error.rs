use roster_ai::AiError;

/// Error type for roster generation.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Input rejected before any row is generated.
    #[error("{0}")]
    Validation(String),

    #[error(
        "No Gemini API key available. Set GOOGLE_API_KEY in the environment or provide a key override."
    )]
    MissingCredential,

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Ai(#[from] AiError),

    #[error("AI editing was requested but no editor is configured")]
    EditorUnavailable,
}
