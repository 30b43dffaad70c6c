use std::env;
use std::time::Duration;

pub const DEFAULT_TRANSLATE_API_URL: &str = "https://libretranslate.com/translate";
pub const DEFAULT_TTS_API_URL: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

#[derive(Debug, Clone)]
pub struct Config {
    // LibreTranslate
    pub translate_api_url: String,
    pub translate_api_key: String,
    // Google Cloud Text-to-Speech
    pub tts_api_url: String,
    pub google_api_key: Option<String>,
    pub google_access_token: Option<String>,
    pub request_timeout: Option<Duration>,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },

    #[error("failed to build http client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Config {
            translate_api_url: env::var("TRANSLATE_API_URL")
                .unwrap_or_else(|_| DEFAULT_TRANSLATE_API_URL.to_string()),
            // LibreTranslate accepts keyless requests on some instances
            translate_api_key: env::var("TRANSLATE_API_KEY").unwrap_or_default(),
            tts_api_url: env::var("TTS_API_URL").unwrap_or_else(|_| DEFAULT_TTS_API_URL.to_string()),
            google_api_key: non_empty_var("GOOGLE_TTS_API_KEY"),
            google_access_token: non_empty_var("GOOGLE_ACCESS_TOKEN"),
            request_timeout: match non_empty_var("REQUEST_TIMEOUT_SECS") {
                Some(raw) => Some(parse_timeout(&raw)?),
                None => None,
            },
            log_format: env::var("LOG_FORMAT")
                .map(|s| match s.to_lowercase().as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(LogFormat::Pretty),
        };

        Ok(config)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidValue {
            name: "REQUEST_TIMEOUT_SECS",
            value: raw.to_string(),
        }),
    }
}
