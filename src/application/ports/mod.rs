mod llm_client;
mod transcription_engine;

pub use llm_client::{LlmClient, LlmClientError};
pub use transcription_engine::{AudioUpload, TranscriptionEngine, TranscriptionError};
