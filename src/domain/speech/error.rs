/// Rejected CLI parameters
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("text is required")]
    EmptyInput,
    #[error("invalid voice name: {0}")]
    UnknownVoice(String),
    #[error("{field} must be between {min} and {max}, got: {value}")]
    Range {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Failure to reach or use the speech synthesis service.
/// Remote failures (auth, quota, bad voice, transport) are not told apart.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("client initialization failed: {0}")]
    ClientInit(String),
    #[error("{0}")]
    Remote(String),
}
