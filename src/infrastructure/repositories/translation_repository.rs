use crate::domain::translation::TranslationError;
use async_trait::async_trait;

/// Repository for text translation.
/// Abstracts the underlying provider (LibreTranslate today).
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Translate English `text` into Russian
    ///
    /// # Errors
    /// Returns error on transport failure, non-success status, or an
    /// undecodable response body
    async fn translate(&self, text: &str) -> Result<String, TranslationError>;
}
