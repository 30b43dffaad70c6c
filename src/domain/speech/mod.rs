pub mod error;
pub mod options;
pub mod request;

pub use error::{SynthesisError, ValidationError};
pub use options::{AudioEncoding, SpeechOptions, Voice};
pub use request::SynthesisRequest;
