use super::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Language every synthesized voice speaks
pub const LANGUAGE_CODE: &str = "ru-RU";

pub const MIN_SPEAKING_RATE: f64 = 0.25;
pub const MAX_SPEAKING_RATE: f64 = 4.0;
pub const MIN_PITCH: f64 = -20.0;
pub const MAX_PITCH: f64 = 20.0;

/// Russian voices offered by Google Cloud Text-to-Speech
///
/// See https://cloud.google.com/text-to-speech/docs/list-voices-and-types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Voice {
    #[serde(rename = "ru-RU-Standard-A")]
    StandardA,
    #[serde(rename = "ru-RU-Standard-B")]
    StandardB,
    #[serde(rename = "ru-RU-Standard-C")]
    StandardC,
    #[serde(rename = "ru-RU-Standard-D")]
    StandardD,
    #[serde(rename = "ru-RU-Standard-E")]
    StandardE,
    #[serde(rename = "ru-RU-Wavenet-A")]
    WavenetA,
    #[serde(rename = "ru-RU-Wavenet-B")]
    WavenetB,
    #[serde(rename = "ru-RU-Wavenet-C")]
    WavenetC,
    #[serde(rename = "ru-RU-Wavenet-D")]
    WavenetD,
    #[serde(rename = "ru-RU-Wavenet-E")]
    WavenetE,
}

impl Voice {
    pub const ALL: [Voice; 10] = [
        Voice::StandardA,
        Voice::StandardB,
        Voice::StandardC,
        Voice::StandardD,
        Voice::StandardE,
        Voice::WavenetA,
        Voice::WavenetB,
        Voice::WavenetC,
        Voice::WavenetD,
        Voice::WavenetE,
    ];

    /// Resolve a CLI token (`stand-a`, `WAVE-c`, ...) case-insensitively
    pub fn from_token(token: &str) -> Option<Self> {
        let voice = match token.to_lowercase().as_str() {
            "stand-a" => Voice::StandardA,
            "stand-b" => Voice::StandardB,
            "stand-c" => Voice::StandardC,
            "stand-d" => Voice::StandardD,
            "stand-e" => Voice::StandardE,
            "wave-a" => Voice::WavenetA,
            "wave-b" => Voice::WavenetB,
            "wave-c" => Voice::WavenetC,
            "wave-d" => Voice::WavenetD,
            "wave-e" => Voice::WavenetE,
            _ => return None,
        };
        Some(voice)
    }

    /// CLI token accepted by `from_token`
    pub fn token(&self) -> &'static str {
        match self {
            Voice::StandardA => "stand-a",
            Voice::StandardB => "stand-b",
            Voice::StandardC => "stand-c",
            Voice::StandardD => "stand-d",
            Voice::StandardE => "stand-e",
            Voice::WavenetA => "wave-a",
            Voice::WavenetB => "wave-b",
            Voice::WavenetC => "wave-c",
            Voice::WavenetD => "wave-d",
            Voice::WavenetE => "wave-e",
        }
    }

    /// Voice name as the synthesis API expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::StandardA => "ru-RU-Standard-A",
            Voice::StandardB => "ru-RU-Standard-B",
            Voice::StandardC => "ru-RU-Standard-C",
            Voice::StandardD => "ru-RU-Standard-D",
            Voice::StandardE => "ru-RU-Standard-E",
            Voice::WavenetA => "ru-RU-Wavenet-A",
            Voice::WavenetB => "ru-RU-Wavenet-B",
            Voice::WavenetC => "ru-RU-Wavenet-C",
            Voice::WavenetD => "ru-RU-Wavenet-D",
            Voice::WavenetE => "ru-RU-Wavenet-E",
        }
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioEncoding {
    #[serde(rename = "LINEAR16")]
    Linear16,
    #[serde(rename = "MP3")]
    Mp3,
    #[serde(rename = "OGG_OPUS")]
    OggOpus,
}

impl AudioEncoding {
    /// Pick the encoding from an output path's extension.
    /// Only `.wav` and `.mp3` are accepted, in any case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "wav" => Some(AudioEncoding::Linear16),
            "mp3" => Some(AudioEncoding::Mp3),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AudioEncoding::Linear16 => "LINEAR16",
            AudioEncoding::Mp3 => "MP3",
            AudioEncoding::OggOpus => "OGG_OPUS",
        }
    }
}

impl std::fmt::Display for AudioEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated parameters for a single synthesis call
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechOptions {
    pub language_code: &'static str,
    pub voice: Voice,
    pub audio_encoding: AudioEncoding,
    pub speaking_rate: f64,
    pub pitch: f64,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            language_code: LANGUAGE_CODE,
            voice: Voice::StandardA,
            audio_encoding: AudioEncoding::Mp3,
            speaking_rate: 1.0,
            pitch: 0.0,
        }
    }
}

impl SpeechOptions {
    /// Build options from raw CLI parameters.
    ///
    /// Checks run in order: text, voice, rate, pitch, output extension.
    /// The first failing check is reported.
    pub fn validate(
        text: &str,
        voice_token: &str,
        output: &Path,
        speaking_rate: f64,
        pitch: f64,
    ) -> Result<Self, ValidationError> {
        if text.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        let voice = Voice::from_token(voice_token)
            .ok_or_else(|| ValidationError::UnknownVoice(voice_token.to_lowercase()))?;

        // NaN fails `contains`, so it is rejected as out of range
        if !(MIN_SPEAKING_RATE..=MAX_SPEAKING_RATE).contains(&speaking_rate) {
            return Err(ValidationError::Range {
                field: "speech rate",
                value: speaking_rate,
                min: MIN_SPEAKING_RATE,
                max: MAX_SPEAKING_RATE,
            });
        }

        if !(MIN_PITCH..=MAX_PITCH).contains(&pitch) {
            return Err(ValidationError::Range {
                field: "pitch adjustment",
                value: pitch,
                min: MIN_PITCH,
                max: MAX_PITCH,
            });
        }

        let audio_encoding = AudioEncoding::from_path(output)
            .ok_or_else(|| ValidationError::UnsupportedFormat(output.display().to_string()))?;

        Ok(Self {
            language_code: LANGUAGE_CODE,
            voice,
            audio_encoding,
            speaking_rate,
            pitch,
        })
    }
}
