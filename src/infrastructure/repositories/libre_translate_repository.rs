use super::translation_repository::TranslationRepository;
use crate::domain::translation::{TranslationError, TranslationRequest, TranslationResponse};
use async_trait::async_trait;

/// LibreTranslate implementation of the translation repository
pub struct LibreTranslateRepository {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl LibreTranslateRepository {
    pub fn new(http_client: reqwest::Client, endpoint: String, api_key: String) -> Self {
        Self {
            http_client,
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl TranslationRepository for LibreTranslateRepository {
    async fn translate(&self, text: &str) -> Result<String, TranslationError> {
        let start_time = std::time::Instant::now();
        let payload = TranslationRequest::en_to_ru(text, &self.api_key);

        tracing::info!(
            endpoint = %self.endpoint,
            source = %payload.source,
            target = %payload.target,
            text_length = text.len(),
            has_api_key = !self.api_key.is_empty(),
            "Calling translation API"
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, endpoint = %self.endpoint, "Translation request failed");
                TranslationError::Network(e)
            })?;

        let status = response.status();
        // Reading the body to the end releases the connection
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                "Translation API returned an error status"
            );
            return Err(TranslationError::RemoteStatus {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: TranslationResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, body_length = body.len(), "Failed to decode translation response");
            TranslationError::Decode(e)
        })?;

        tracing::info!(
            provider = "libretranslate",
            latency_ms = start_time.elapsed().as_millis(),
            translated_length = decoded.translated_text.len(),
            "Translation completed"
        );

        Ok(decoded.translated_text)
    }
}
