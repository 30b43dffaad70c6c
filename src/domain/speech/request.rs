use super::options::{AudioEncoding, SpeechOptions};
use serde::Serialize;

/// Body of `POST /v1/text:synthesize`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisRequest {
    pub input: SynthesisInput,
    pub voice: VoiceSelectionParams,
    pub audio_config: AudioConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynthesisInput {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SsmlVoiceGender {
    Male,
    Female,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSelectionParams {
    pub language_code: String,
    pub name: String,
    pub ssml_gender: SsmlVoiceGender,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioConfig {
    pub audio_encoding: AudioEncoding,
    pub speaking_rate: f64,
    pub pitch: f64,
}

impl SynthesisRequest {
    pub fn new(text: &str, options: &SpeechOptions) -> Self {
        Self {
            input: SynthesisInput {
                text: text.to_string(),
            },
            voice: VoiceSelectionParams {
                language_code: options.language_code.to_string(),
                name: options.voice.as_str().to_string(),
                ssml_gender: SsmlVoiceGender::Neutral,
            },
            audio_config: AudioConfig {
                audio_encoding: options.audio_encoding,
                speaking_rate: options.speaking_rate,
                pitch: options.pitch,
            },
        }
    }
}
