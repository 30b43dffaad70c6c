use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    domain::pipeline::{SpeechJob, SpeechPipeline, SpeechPipelineApi},
    error::{AppError, EXIT_OK},
};

/// Long flags that may be written with a single dash (`-text`)
const LONG_FLAGS: &[&str] = &["text", "voice", "rate", "pitch", "help", "version"];
/// Flags that consume the following argument as their value
const VALUE_FLAGS: &[&str] = &["text", "voice", "rate", "pitch", "o"];

/// Translate English text to Russian and synthesize it to an audio file
#[derive(Debug, Parser)]
#[command(name = "en2ru-speech", version, long_about = None)]
pub struct CliArgs {
    /// English text to translate and speak
    #[arg(long, allow_hyphen_values = true)]
    pub text: String,

    /// Voice: stand-a..stand-e or wave-a..wave-e
    #[arg(long, default_value = "stand-a", allow_hyphen_values = true)]
    pub voice: String,

    /// Speech rate (0.25 to 4.0)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub rate: f64,

    /// Pitch adjustment (-20.0 to 20.0)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub pitch: f64,

    /// Output audio file; .wav writes LINEAR16, .mp3 writes MP3
    #[arg(short = 'o', long = "o", value_name = "PATH", allow_hyphen_values = true)]
    pub output: PathBuf,
}

impl From<CliArgs> for SpeechJob {
    fn from(args: CliArgs) -> Self {
        SpeechJob {
            text: args.text,
            voice: args.voice,
            speaking_rate: args.rate,
            pitch: args.pitch,
            output: args.output,
        }
    }
}

/// What argument parsing produced
pub enum ParsedArgs {
    Run(CliArgs),
    /// `--help` or `--version` output, printed to stdout with exit 0
    Info(String),
}

/// Rewrite `-text value` / `-text=value` into the `--text` form clap expects.
///
/// Values following a flag are never rewritten, and nothing after a bare
/// `--` is touched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut expect_value = false;
    let mut passthrough = false;

    for (index, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        // argv[0]
        if index == 0 || passthrough || expect_value {
            expect_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(raw) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };

        if raw == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }

        let flag = raw.strip_prefix("--").or_else(|| raw.strip_prefix('-'));
        let Some(flag) = flag else {
            normalized.push(arg);
            continue;
        };

        let (name, has_inline_value) = match flag.split_once('=') {
            Some((name, _)) => (name, true),
            None => (flag, false),
        };

        expect_value = !has_inline_value && VALUE_FLAGS.contains(&name);

        if !raw.starts_with("--") && LONG_FLAGS.contains(&name) {
            normalized.push(OsString::from(format!("-{}", raw)));
        } else {
            normalized.push(arg);
        }
    }

    normalized
}

/// Parse process arguments, mapping clap failures to `AppError::FlagParse`
pub fn parse_args<I, T>(args: I) -> Result<ParsedArgs, AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    match CliArgs::try_parse_from(normalize_args(args)) {
        Ok(args) => Ok(ParsedArgs::Run(args)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(ParsedArgs::Info(err.render().to_string()))
        }
        Err(err) => Err(AppError::FlagParse(err.render().to_string().trim_end().to_string())),
    }
}

pub struct CliController {
    pipeline: Arc<SpeechPipeline>,
}

impl CliController {
    pub fn new(pipeline: Arc<SpeechPipeline>) -> Self {
        Self { pipeline }
    }

    /// Run one job and report it, returning the process exit code
    pub async fn handle(&self, args: CliArgs, out: &mut impl Write, err: &mut impl Write) -> u8 {
        match self.pipeline.run(args.into()).await {
            Ok(outcome) => {
                tracing::info!(
                    output = %outcome.output.display(),
                    translated_length = outcome.translated_text.chars().count(),
                    audio_size = outcome.audio_size,
                    "Speech synthesis completed"
                );
                let _ = writeln!(out, "Speech synthesis completed successfully.");
                EXIT_OK
            }
            Err(e) => report(&e, err),
        }
    }
}

/// Print an error to the error stream and return its exit code
pub fn report(error: &AppError, err: &mut impl Write) -> u8 {
    tracing::error!(error = %error, exit_code = error.exit_code(), "Run failed");
    let _ = writeln!(err, "{}", error);
    error.exit_code()
}
