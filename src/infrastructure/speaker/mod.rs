use crate::domain::speech::SynthesisError;
use crate::infrastructure::repositories::{TtsConnector, TtsRepository};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Owns the one speech-service connection used for the life of the process.
///
/// The connection is opened on first use and reused afterwards. Concurrent
/// first callers wait on the same initialization, so the connector runs at
/// most once per successful connect. A failed connect leaves the slot empty.
pub struct Speaker {
    connector: Arc<dyn TtsConnector>,
    client: OnceCell<Arc<dyn TtsRepository>>,
}

impl Speaker {
    pub fn new(connector: Arc<dyn TtsConnector>) -> Self {
        Self {
            connector,
            client: OnceCell::new(),
        }
    }

    /// Return the existing client or open a new one
    pub async fn get_or_create(&self) -> Result<Arc<dyn TtsRepository>, SynthesisError> {
        let client = self
            .client
            .get_or_try_init(|| async {
                tracing::debug!("Opening speech service connection");
                self.connector.connect().await
            })
            .await?;

        Ok(Arc::clone(client))
    }

    pub fn is_connected(&self) -> bool {
        self.client.initialized()
    }
}
