use crate::domain::speech::{SynthesisError, ValidationError};
use crate::domain::translation::TranslationError;
use crate::infrastructure::config::ConfigError;
use crate::infrastructure::output::OutputError;

pub const EXIT_OK: u8 = 0;
pub const EXIT_PARSE_FLAGS_ERROR: u8 = 1;
pub const EXIT_VALIDATE_ERROR: u8 = 2;
pub const EXIT_INTERNAL_ERROR: u8 = 3;
pub const EXIT_OUTPUT_ERROR: u8 = 4;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Error parsing flags: {0}")]
    FlagParse(String),

    #[error("Error validating flags: {0}")]
    Validation(#[from] ValidationError),

    #[error("Error loading configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Error translating text: {0}")]
    Translation(#[from] TranslationError),

    #[error("Error creating speech client: {0}")]
    SpeechClient(SynthesisError),

    #[error("Error synthesizing speech: {0}")]
    Synthesis(SynthesisError),

    #[error("Error writing output file: {0}")]
    Output(#[from] OutputError),
}

impl AppError {
    /// Get the process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::FlagParse(_) => EXIT_PARSE_FLAGS_ERROR,
            Self::Validation(_) => EXIT_VALIDATE_ERROR,
            Self::Config(_) | Self::Translation(_) | Self::SpeechClient(_) | Self::Synthesis(_) => {
                EXIT_INTERNAL_ERROR
            }
            Self::Output(_) => EXIT_OUTPUT_ERROR,
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
