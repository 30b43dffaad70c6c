use super::tts_repository::{TtsConnector, TtsRepository};
use crate::domain::speech::{SynthesisError, SynthesisRequest};
use crate::infrastructure::http::build_http_client;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// How requests to Google Cloud Text-to-Speech are authenticated
#[derive(Clone)]
pub enum GoogleCredentials {
    /// Sent as `x-goog-api-key`
    ApiKey(String),
    /// OAuth2 access token, sent as `Authorization: Bearer`
    AccessToken(String),
}

impl GoogleCredentials {
    /// API key wins when both are present
    pub fn from_parts(api_key: Option<String>, access_token: Option<String>) -> Option<Self> {
        api_key
            .map(GoogleCredentials::ApiKey)
            .or_else(|| access_token.map(GoogleCredentials::AccessToken))
    }

    fn kind(&self) -> &'static str {
        match self {
            GoogleCredentials::ApiKey(_) => "api_key",
            GoogleCredentials::AccessToken(_) => "access_token",
        }
    }
}

impl std::fmt::Debug for GoogleCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GoogleCredentials::{}(..)", self.kind())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeSpeechResponse {
    audio_content: String,
}

/// Google Cloud Text-to-Speech implementation of TTS repository
pub struct GoogleTtsRepository {
    http_client: reqwest::Client,
    endpoint: String,
    credentials: GoogleCredentials,
}

impl GoogleTtsRepository {
    pub fn new(http_client: reqwest::Client, endpoint: String, credentials: GoogleCredentials) -> Self {
        Self {
            http_client,
            endpoint,
            credentials,
        }
    }

    async fn call_google(&self, request: &SynthesisRequest) -> Result<Vec<u8>, SynthesisError> {
        let builder = self.http_client.post(&self.endpoint).json(request);
        let builder = match &self.credentials {
            GoogleCredentials::ApiKey(key) => builder.header("x-goog-api-key", key),
            GoogleCredentials::AccessToken(token) => builder.bearer_auth(token),
        };

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, endpoint = %self.endpoint, "Google TTS request failed");
            SynthesisError::Remote(format!("Google TTS request failed: {}", e))
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SynthesisError::Remote(format!("Failed to read Google TTS response: {}", e)))?;

        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                body = %body,
                voice = %request.voice.name,
                "Google TTS returned an error status"
            );
            return Err(SynthesisError::Remote(format!(
                "Google TTS error (status {}): {}",
                status.as_u16(),
                body.trim()
            )));
        }

        let decoded: SynthesizeSpeechResponse = serde_json::from_str(&body)
            .map_err(|e| SynthesisError::Remote(format!("Failed to parse Google TTS response: {}", e)))?;

        STANDARD
            .decode(decoded.audio_content.as_bytes())
            .map_err(|e| SynthesisError::Remote(format!("Invalid audio payload: {}", e)))
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, SynthesisError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            voice = %request.voice.name,
            language = %request.voice.language_code,
            encoding = %request.audio_config.audio_encoding,
            speaking_rate = request.audio_config.speaking_rate,
            pitch = request.audio_config.pitch,
            text_length = request.input.text.len(),
            "Starting Google TTS synthesis"
        );

        let audio_data = self.call_google(request).await?;

        tracing::info!(
            provider = "google",
            voice = %request.voice.name,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = request.input.text.chars().count(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}

/// Builds `GoogleTtsRepository` instances from configuration
pub struct GoogleTtsConnector {
    endpoint: String,
    credentials: Option<GoogleCredentials>,
    timeout: Option<Duration>,
}

impl GoogleTtsConnector {
    pub fn new(endpoint: String, credentials: Option<GoogleCredentials>, timeout: Option<Duration>) -> Self {
        Self {
            endpoint,
            credentials,
            timeout,
        }
    }
}

#[async_trait]
impl TtsConnector for GoogleTtsConnector {
    async fn connect(&self) -> Result<Arc<dyn TtsRepository>, SynthesisError> {
        let credentials = self.credentials.clone().ok_or_else(|| {
            SynthesisError::ClientInit(
                "no Google credentials configured, set GOOGLE_TTS_API_KEY or GOOGLE_ACCESS_TOKEN".to_string(),
            )
        })?;

        let http_client = build_http_client(self.timeout)
            .map_err(|e| SynthesisError::ClientInit(format!("failed to build HTTP client: {}", e)))?;

        tracing::info!(
            endpoint = %self.endpoint,
            credentials = credentials.kind(),
            "Google TTS client initialized"
        );

        Ok(Arc::new(GoogleTtsRepository::new(
            http_client,
            self.endpoint.clone(),
            credentials,
        )))
    }
}
