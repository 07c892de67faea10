mod azure_whisper_engine;
mod multipart_upload;
mod openai_whisper_engine;
mod transcription_engine_factory;

pub use azure_whisper_engine::AzureWhisperEngine;
pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use transcription_engine_factory::TranscriptionEngineFactory;
