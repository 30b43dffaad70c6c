use assert_cmd::Command;
use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;
use test_context::AsyncTestContext;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TRANSLATE_PATH: &str = "/translate";
pub const SYNTHESIZE_PATH: &str = "/v1/text:synthesize";

const CONFIG_VARS: [&str; 8] = [
    "TRANSLATE_API_URL",
    "TRANSLATE_API_KEY",
    "TTS_API_URL",
    "GOOGLE_TTS_API_KEY",
    "GOOGLE_ACCESS_TOKEN",
    "REQUEST_TIMEOUT_SECS",
    "LOG_FORMAT",
    "RUST_LOG",
];

pub struct TestContext {
    pub server: MockServer,
    pub dir: TempDir,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let server = MockServer::start().await;
            let dir = tempfile::tempdir().expect("Failed to create scratch directory");

            Self { server, dir }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async move {
            // Fails the test if a mock's call-count expectation was not met
            self.server.verify().await;
        }
    }
}

impl TestContext {
    /// Binary pointed at the mock server, running inside the scratch directory
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("en2ru-speech").expect("binary should be built");
        for var in CONFIG_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.dir.path())
            .env("TRANSLATE_API_URL", format!("{}{}", self.server.uri(), TRANSLATE_PATH))
            .env("TTS_API_URL", format!("{}{}", self.server.uri(), SYNTHESIZE_PATH))
            .env("GOOGLE_TTS_API_KEY", "test-api-key");
        cmd
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.dir.path().join(file_name)
    }

    /// Translation endpoint answering `translated_text`, expected to be hit `times` times
    pub async fn mock_translation(&self, translated_text: &str, times: u64) {
        self.mock_translation_response(
            ResponseTemplate::new(200).set_body_json(json!({ "translatedText": translated_text })),
            times,
        )
        .await;
    }

    pub async fn mock_translation_response(&self, response: ResponseTemplate, times: u64) {
        Mock::given(method("POST"))
            .and(path(TRANSLATE_PATH))
            .respond_with(response)
            .expect(times)
            .named("translation")
            .mount(&self.server)
            .await;
    }

    /// Synthesis endpoint answering with `audio`, expected to be hit `times` times
    pub async fn mock_synthesis(&self, audio: &[u8], times: u64) {
        use base64::{engine::general_purpose::STANDARD, Engine as _};

        self.mock_synthesis_response(
            ResponseTemplate::new(200).set_body_json(json!({ "audioContent": STANDARD.encode(audio) })),
            times,
        )
        .await;
    }

    pub async fn mock_synthesis_response(&self, response: ResponseTemplate, times: u64) {
        Mock::given(method("POST"))
            .and(path(SYNTHESIZE_PATH))
            .respond_with(response)
            .expect(times)
            .named("synthesis")
            .mount(&self.server)
            .await;
    }

    /// Fails if any request reached the mock server
    pub async fn assert_no_network_calls(&self) {
        let requests = self.server.received_requests().await.unwrap_or_default();
        assert!(
            requests.is_empty(),
            "expected no outbound calls, got {}",
            requests.len()
        );
    }
}
