mod chat_completion_service;
mod composite_chat_service;
mod pipeline_error;
mod prompt_template;
pub mod request_classifier;
mod temp_audio_file;
mod transcription_service;

pub use chat_completion_service::ChatCompletionService;
pub use composite_chat_service::{ChatAnswer, CompositeChatService};
pub use pipeline_error::{MISSING_REQUIRED_FIELDS, PipelineError};
pub use prompt_template::build_prompt;
pub use request_classifier::{Classified, classify};
pub use temp_audio_file::{TempAudioFile, scratch_file_name};
pub use transcription_service::{NO_SPEECH_DETECTED, TranscriptionService, ValidatedAudio};
