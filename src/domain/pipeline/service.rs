use crate::domain::speech::{SpeechOptions, SynthesisRequest};
use crate::domain::translation::TranslationError;
use crate::error::{AppError, AppResult};
use crate::infrastructure::output::write_audio;
use crate::infrastructure::repositories::TranslationRepository;
use crate::infrastructure::speaker::Speaker;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

/// Raw parameters of one invocation, as they come off the command line
#[derive(Debug, Clone)]
pub struct SpeechJob {
    pub text: String,
    pub voice: String,
    pub speaking_rate: f64,
    pub pitch: f64,
    pub output: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SpeechOutcome {
    pub output: PathBuf,
    pub translated_text: String,
    pub audio_size: usize,
}

pub struct SpeechPipeline {
    translation_repo: Arc<dyn TranslationRepository>,
    speaker: Arc<Speaker>,
}

impl SpeechPipeline {
    pub fn new(translation_repo: Arc<dyn TranslationRepository>, speaker: Arc<Speaker>) -> Self {
        Self {
            translation_repo,
            speaker,
        }
    }
}

#[async_trait]
pub trait SpeechPipelineApi: Send + Sync {
    /// Translate and voice one piece of text
    ///
    /// This operation:
    /// - Validates the options before any network call
    /// - Translates English to Russian
    /// - Synthesizes the translation with the shared speech client
    /// - Writes the audio file, only after both remote calls succeeded
    async fn run(&self, job: SpeechJob) -> AppResult<SpeechOutcome>;
}

#[async_trait]
impl SpeechPipelineApi for SpeechPipeline {
    async fn run(&self, job: SpeechJob) -> AppResult<SpeechOutcome> {
        tracing::info!(
            voice = %job.voice,
            speaking_rate = job.speaking_rate,
            pitch = job.pitch,
            output = %job.output.display(),
            text_length = job.text.len(),
            "Speech job received"
        );

        // 1. Validate options
        let options = SpeechOptions::validate(
            &job.text,
            &job.voice,
            &job.output,
            job.speaking_rate,
            job.pitch,
        )?;

        // 2. Translate
        let translated_text = self.translation_repo.translate(&job.text).await?;
        if translated_text.is_empty() {
            return Err(TranslationError::EmptyTranslation.into());
        }

        // 3. Acquire the speech client
        tracing::debug!(reuse = self.speaker.is_connected(), "Acquiring speech client");
        let tts_repo = self
            .speaker
            .get_or_create()
            .await
            .map_err(AppError::SpeechClient)?;

        // 4. Synthesize
        let request = SynthesisRequest::new(&translated_text, &options);
        let audio_data = tts_repo
            .synthesize(&request)
            .await
            .map_err(AppError::Synthesis)?;

        // 5. Persist
        write_audio(&job.output, &audio_data).await?;

        tracing::info!(
            output = %job.output.display(),
            voice = %options.voice,
            encoding = %options.audio_encoding,
            audio_size_bytes = audio_data.len(),
            "Speech job completed"
        );

        Ok(SpeechOutcome {
            output: job.output,
            translated_text,
            audio_size: audio_data.len(),
        })
    }
}
