pub mod error;

pub use error::TranslationError;

use serde::{Deserialize, Serialize};

pub const SOURCE_LANGUAGE: &str = "en";
pub const TARGET_LANGUAGE: &str = "ru";
pub const TEXT_FORMAT: &str = "text";
pub const ALTERNATIVES: u32 = 3;

/// Request body for LibreTranslate `POST /translate`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationRequest {
    pub q: String,
    pub source: String,
    pub target: String,
    pub format: String,
    pub alternatives: u32,
    pub api_key: String,
}

impl TranslationRequest {
    /// English to Russian, plain text
    pub fn en_to_ru(text: &str, api_key: &str) -> Self {
        Self {
            q: text.to_string(),
            source: SOURCE_LANGUAGE.to_string(),
            target: TARGET_LANGUAGE.to_string(),
            format: TEXT_FORMAT.to_string(),
            alternatives: ALTERNATIVES,
            api_key: api_key.to_string(),
        }
    }
}

/// Only `translatedText` is read; `alternatives` and friends are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationResponse {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}
