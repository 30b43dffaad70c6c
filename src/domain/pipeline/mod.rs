pub mod service;

pub use service::{SpeechJob, SpeechOutcome, SpeechPipeline, SpeechPipelineApi};
