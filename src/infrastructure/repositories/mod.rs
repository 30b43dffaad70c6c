pub mod google_tts_repository;
pub mod libre_translate_repository;
pub mod translation_repository;
pub mod tts_repository;

pub use google_tts_repository::{GoogleCredentials, GoogleTtsConnector, GoogleTtsRepository};
pub use libre_translate_repository::LibreTranslateRepository;
pub use translation_repository::TranslationRepository;
pub use tts_repository::{TtsConnector, TtsRepository};
