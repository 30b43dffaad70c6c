use crate::domain::speech::{SynthesisError, SynthesisRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (Google Cloud Text-to-Speech today).
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize a fully shaped request
    ///
    /// Returns the raw audio payload in the encoding the request asked for
    ///
    /// # Errors
    /// Any remote failure is surfaced as `SynthesisError::Remote`
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, SynthesisError>;
}

/// Opens a connection to a TTS provider
#[async_trait]
pub trait TtsConnector: Send + Sync {
    async fn connect(&self) -> Result<Arc<dyn TtsRepository>, SynthesisError>;
}
