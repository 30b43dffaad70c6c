#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("failed to translate text, status code: {status}")]
    RemoteStatus { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("translation service returned empty text")]
    EmptyTranslation,
}
